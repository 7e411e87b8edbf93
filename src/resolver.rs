//! Template token resolution over content values.
//!
//! # Token grammar
//!
//! | Form       | Example               | Notes                       |
//! |------------|-----------------------|-----------------------------|
//! | `{{path}}` | `{{address.street}}`  | preferred                   |
//! | `{path}`   | `{siteName}`          | legacy, lower precedence    |
//!
//! A path is dot-separated `[A-Za-z0-9_]+` segments; whitespace inside the
//! braces is tolerated. Both forms are matched in one scan with the
//! double-brace alternative first, so a `{{...}}` token that stays in the
//! output is never re-matched as a single-brace token over its inner
//! braces. Anything the grammar rejects (unbalanced braces, empty or
//! malformed paths) passes through literally.
//!
//! # Per-token outcome
//!
//! - path found, rendered text free of braces: substituted;
//! - path found, rendered text contains `{` or `}`: left verbatim and
//!   warned. This is the termination guard: a value that is itself
//!   template syntax is never expanded, so no token chain can recurse;
//! - path missing, path mentions `programmaticInstance`: replaced with the
//!   empty string, silently (instance tokens vanish on non-instance pages);
//! - path missing otherwise: left verbatim and warned.
//!
//! Substituted text is never re-scanned; one pass, bounded by input size.
//! Re-running the resolver on its own output changes nothing.

use crate::context::TemplateContext;
use crate::log;
use crate::tree::ComponentNode;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

// ============================================================================
// String Resolution
// ============================================================================

/// Replace every template token in `input` with its context value.
pub fn resolve_str(input: &str, ctx: &TemplateContext) -> String {
    static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"\{\{\s*([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}\}|\{\s*([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}",
        )
        .unwrap()
    });

    if !input.contains('{') {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in TOKEN.captures_iter(input) {
        let Some(token) = caps.get(0) else { continue };
        let Some(path) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };

        out.push_str(&input[last..token.start()]);
        out.push_str(&substitute(token.as_str(), path.as_str(), ctx));
        last = token.end();
    }

    out.push_str(&input[last..]);
    out
}

/// Decide the replacement text for one matched token.
fn substitute(token: &str, path: &str, ctx: &TemplateContext) -> String {
    match ctx.lookup(path) {
        Some(value) => {
            let rendered = render_value(value);
            if rendered.contains(['{', '}']) {
                log!("resolver"; "value for '{path}' contains template syntax, token left verbatim");
                token.to_owned()
            } else {
                rendered
            }
        }
        None if path.contains("programmaticInstance") => String::new(),
        None => {
            log!("resolver"; "no value for '{path}', token left verbatim");
            token.to_owned()
        }
    }
}

/// Render a context value as substitution text.
///
/// Strings go in verbatim, numbers and booleans via their display form,
/// null as the empty string. Arrays and objects render as compact JSON;
/// objects always carry braces, so the caller's guard rejects them.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

// ============================================================================
// Tree Resolution
// ============================================================================

/// Resolve a value of any shape, returning a new value.
///
/// Strings are token-expanded; arrays and objects recurse element- and
/// value-wise (object keys are never templated); other leaves are cloned
/// unchanged.
pub fn resolve(value: &Value, ctx: &TemplateContext) -> Value {
    match value {
        Value::String(s) => Value::String(resolve_str(s, ctx)),
        Value::Array(items) => Value::Array(items.iter().map(|v| resolve(v, ctx)).collect()),
        Value::Object(map) => {
            let resolved: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), resolve(v, ctx)))
                .collect();
            Value::Object(resolved)
        }
        other => other.clone(),
    }
}

/// Resolve one component node, producing a new node.
pub fn resolve_node(node: &ComponentNode, ctx: &TemplateContext) -> ComponentNode {
    ComponentNode {
        kind: resolve_str(&node.kind, ctx),
        id: node.id.as_deref().map(|id| resolve_str(id, ctx)),
        props: match resolve(&Value::Object(node.props.clone()), ctx) {
            Value::Object(map) => map,
            _ => node.props.clone(),
        },
    }
}

/// Resolve a whole content tree, preserving node order.
pub fn resolve_tree(nodes: &[ComponentNode], ctx: &TemplateContext) -> Vec<ComponentNode> {
    nodes.iter().map(|node| resolve_node(node, ctx)).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(pairs: &[(&str, Value)]) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        for (path, value) in pairs {
            ctx.insert_path(path, value.clone());
        }
        ctx
    }

    #[test]
    fn test_dot_path_substitution() {
        let ctx = ctx(&[("address.street", json!("Main St"))]);
        assert_eq!(resolve_str("{{address.street}}", &ctx), "Main St");
    }

    #[test]
    fn test_substitution_inside_surrounding_text() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        assert_eq!(
            resolve_str("Welcome to {{siteName}}!", &ctx),
            "Welcome to Acme!"
        );
    }

    #[test]
    fn test_adjacent_tokens() {
        let ctx = ctx(&[("a", json!("1")), ("b", json!("2"))]);
        assert_eq!(resolve_str("{{a}}{{b}}", &ctx), "12");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        assert_eq!(resolve_str("{{ siteName }}", &ctx), "Acme");
        assert_eq!(resolve_str("{ siteName }", &ctx), "Acme");
    }

    #[test]
    fn test_missing_path_left_verbatim() {
        let ctx = TemplateContext::new();
        assert_eq!(resolve_str("{{nope.path}}", &ctx), "{{nope.path}}");
    }

    #[test]
    fn test_missing_instance_token_resolves_empty() {
        let ctx = TemplateContext::new();
        assert_eq!(resolve_str("{{programmaticInstanceName}}", &ctx), "");
        assert_eq!(
            resolve_str("in {{programmaticInstanceName}} and beyond", &ctx),
            "in  and beyond"
        );
    }

    #[test]
    fn test_self_referential_value_terminates() {
        let ctx = ctx(&[("k", json!("{{k}}"))]);
        assert_eq!(resolve_str("{{k}}", &ctx), "{{k}}");
    }

    #[test]
    fn test_value_with_template_syntax_left_verbatim() {
        let ctx = ctx(&[("greeting", json!("hello {{siteName}}"))]);
        assert_eq!(resolve_str("{{greeting}}", &ctx), "{{greeting}}");

        let ctx = self::ctx(&[("legacy", json!("hi {name}"))]);
        assert_eq!(resolve_str("{{legacy}}", &ctx), "{{legacy}}");
    }

    #[test]
    fn test_legacy_single_brace() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        assert_eq!(resolve_str("{siteName}", &ctx), "Acme");
        assert_eq!(resolve_str("call {phoneNumber} now", &ctx), "call {phoneNumber} now");
    }

    #[test]
    fn test_double_brace_wins_over_single() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        // One token, one substitution: no stray brace pair remains
        assert_eq!(resolve_str("{{siteName}}", &ctx), "Acme");
    }

    #[test]
    fn test_unresolved_double_brace_not_rematched_as_single() {
        // The single-brace alternative must not strip the inner braces of
        // a double-brace token that stayed in the output
        let ctx = TemplateContext::new();
        assert_eq!(resolve_str("x {{nope.path}} y", &ctx), "x {{nope.path}} y");
    }

    #[test]
    fn test_number_bool_null_rendering() {
        let ctx = ctx(&[
            ("count", json!(3)),
            ("ratio", json!(2.5)),
            ("active", json!(true)),
            ("missing", Value::Null),
        ]);
        assert_eq!(
            resolve_str("{{count}} items ({{ratio}}x), active: {{active}}", &ctx),
            "3 items (2.5x), active: true"
        );
        assert_eq!(resolve_str("[{{missing}}]", &ctx), "[]");
    }

    #[test]
    fn test_array_value_renders_as_json() {
        let ctx = ctx(&[("items", json!([1, 2]))]);
        assert_eq!(resolve_str("{{items}}", &ctx), "[1,2]");
    }

    #[test]
    fn test_object_value_guarded() {
        // Objects serialize with braces; the guard keeps the token
        let ctx = ctx(&[("obj", json!({"a": 1}))]);
        assert_eq!(resolve_str("x {{obj}}", &ctx), "x {{obj}}");
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let ctx = ctx(&[("a", json!("1"))]);
        assert_eq!(resolve_str("{{}}", &ctx), "{{}}");
        assert_eq!(resolve_str("{a..b}", &ctx), "{a..b}");
        assert_eq!(resolve_str("{ }", &ctx), "{ }");
        assert_eq!(resolve_str("body {color: red}", &ctx), "body {color: red}");
        assert_eq!(resolve_str("unbalanced {{a", &ctx), "unbalanced {{a");
    }

    #[test]
    fn test_no_brace_fast_path() {
        let ctx = TemplateContext::new();
        assert_eq!(resolve_str("plain text", &ctx), "plain text");
    }

    #[test]
    fn test_resolve_recurses_into_arrays_and_objects() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        let input = json!({
            "title": "{{siteName}}",
            "items": ["{{siteName}} one", {"deep": "{{siteName}} two"}],
            "count": 7,
            "flag": false,
            "nothing": null
        });
        let resolved = resolve(&input, &ctx);
        assert_eq!(
            resolved,
            json!({
                "title": "Acme",
                "items": ["Acme one", {"deep": "Acme two"}],
                "count": 7,
                "flag": false,
                "nothing": null
            })
        );
    }

    #[test]
    fn test_object_keys_never_templated() {
        let ctx = ctx(&[("k", json!("v"))]);
        let input = json!({"{{k}}": "{{k}}"});
        let resolved = resolve(&input, &ctx);
        assert_eq!(resolved, json!({"{{k}}": "v"}));
    }

    #[test]
    fn test_resolve_is_idempotent_on_resolved_output() {
        let ctx = ctx(&[("siteName", json!("Acme")), ("loop", json!("{{loop}}"))]);
        let input = json!({
            "a": "Welcome to {{siteName}}",
            "b": "{{nope.path}}",
            "c": "{{loop}}",
            "d": "{{programmaticInstanceName}}"
        });
        let once = resolve(&input, &ctx);
        let twice = resolve(&once, &ctx);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resolve_tree_preserves_order() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        let nodes = vec![
            ComponentNode::with_id("Hero", "hero-1").prop("h1Text", json!("Welcome to {{siteName}}")),
            ComponentNode::new("Divider"),
            ComponentNode::new("TextSection").prop("text", json!("About {{siteName}}")),
        ];

        let resolved = resolve_tree(&nodes, &ctx);

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].kind, "Hero");
        assert_eq!(resolved[0].id.as_deref(), Some("hero-1"));
        assert_eq!(resolved[0].get("h1Text"), Some(&json!("Welcome to Acme")));
        assert_eq!(resolved[1].kind, "Divider");
        assert_eq!(resolved[2].get("text"), Some(&json!("About Acme")));
    }

    #[test]
    fn test_resolve_tree_leaves_input_untouched() {
        let ctx = ctx(&[("siteName", json!("Acme"))]);
        let nodes = vec![ComponentNode::new("Hero").prop("h1Text", json!("{{siteName}}"))];

        let _ = resolve_tree(&nodes, &ctx);
        assert_eq!(nodes[0].get("h1Text"), Some(&json!("{{siteName}}")));
    }

    #[test]
    fn test_node_id_is_templated() {
        let ctx = ctx(&[("programmaticInstanceSlug", json!("berlin"))]);
        let nodes = vec![
            ComponentNode::with_id("Hero", "hero-{{programmaticInstanceSlug}}")
                .prop("h1Text", json!("x")),
        ];
        let resolved = resolve_tree(&nodes, &ctx);
        assert_eq!(resolved[0].id.as_deref(), Some("hero-berlin"));
    }
}
