//! Builtin component catalog.
//!
//! One schema per component kind the shared templates render. This is
//! enumerable data, not logic: adding a component means adding an entry
//! here (or registering one at runtime), never touching the validator.
//!
//! Conventions:
//! - prop defaults may be template tokens; they are filled in before
//!   resolution, so `"{{phoneNumber}}"` becomes the site's number.
//! - a prop description mentioning "icon" opts that prop into icon-name
//!   validation (see [`super::icons`]).

use serde_json::json;

use super::{ComponentSchema, PropSchema};

/// All builtin schemas, in catalog order.
pub fn builtin_schemas() -> Vec<ComponentSchema> {
    let mut schemas = Vec::new();
    schemas.extend(structure_schemas());
    schemas.extend(text_schemas());
    schemas.extend(media_schemas());
    schemas.extend(list_schemas());
    schemas.extend(service_schemas());
    schemas.extend(trust_schemas());
    schemas.extend(conversion_schemas());
    schemas.extend(contact_schemas());
    schemas.extend(instance_schemas());
    schemas.extend(faq_schemas());
    schemas
}

// ============================================================================
// Page Structure
// ============================================================================

fn structure_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("Hero", "Hero", "Full-width banner at the top of a page")
            .prop("h1Text", PropSchema::string().required().describe("Main headline"))
            .prop("subtitle", PropSchema::string())
            .prop("backgroundImage", PropSchema::string().describe("Image path or URL"))
            .prop("ctaLabel", PropSchema::string())
            .prop("ctaHref", PropSchema::string())
            .prop("alignment", PropSchema::string().describe("left, center or right")),
        ComponentSchema::new("PageHeader", "Page header", "Slim title band for inner pages")
            .prop("title", PropSchema::string().required())
            .prop("subtitle", PropSchema::string())
            .prop("showBreadcrumb", PropSchema::boolean().with_default(json!(true))),
        ComponentSchema::new("SectionHeading", "Section heading", "Standalone heading between sections")
            .prop("title", PropSchema::string().required())
            .prop("subtitle", PropSchema::string())
            .prop("level", PropSchema::number().with_default(json!(2)).describe("Heading level 1-6")),
        ComponentSchema::new("Divider", "Divider", "Horizontal rule between sections")
            .prop("style", PropSchema::string().with_default(json!("solid"))),
        ComponentSchema::new("Spacer", "Spacer", "Vertical whitespace")
            .prop("height", PropSchema::number().with_default(json!(48)).describe("Height in pixels")),
    ]
}

// ============================================================================
// Text Content
// ============================================================================

fn text_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("RichText", "Rich text", "Free-form HTML block")
            .prop("html", PropSchema::string().required()),
        ComponentSchema::new("Paragraph", "Paragraph", "Single paragraph of body copy")
            .prop("text", PropSchema::string().required())
            .prop("muted", PropSchema::boolean().with_default(json!(false))),
        ComponentSchema::new("LeadText", "Lead text", "Enlarged introductory paragraph")
            .prop("text", PropSchema::string().required()),
        ComponentSchema::new("QuoteBlock", "Quote", "Pull quote with optional attribution")
            .prop("quote", PropSchema::string().required())
            .prop("attribution", PropSchema::string()),
        ComponentSchema::new("HighlightBox", "Highlight box", "Tinted box for notes and warnings")
            .prop("text", PropSchema::string().required())
            .prop("title", PropSchema::string())
            .prop("tone", PropSchema::string().with_default(json!("info")).describe("info, success or warning")),
    ]
}

// ============================================================================
// Media
// ============================================================================

fn media_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("ImageBlock", "Image", "Single inline image")
            .prop("src", PropSchema::string().required().describe("Image path or URL"))
            .prop("alt", PropSchema::string().required().describe("Alternative text"))
            .prop("caption", PropSchema::string())
            .prop("width", PropSchema::number()),
        ComponentSchema::new("ImageGallery", "Image gallery", "Grid of images with lightbox")
            .prop("images", PropSchema::array().required().describe("Entries with src and alt keys"))
            .prop("columns", PropSchema::number().with_default(json!(3))),
        ComponentSchema::new("VideoEmbed", "Video embed", "Responsive external video player")
            .prop("url", PropSchema::string().required())
            .prop("title", PropSchema::string())
            .prop("aspectRatio", PropSchema::string().with_default(json!("16:9"))),
        ComponentSchema::new("LogoStrip", "Logo strip", "Row of brand or partner logos")
            .prop("logos", PropSchema::array().required().describe("Entries with src and alt keys"))
            .prop("title", PropSchema::string()),
    ]
}

// ============================================================================
// Lists & Grids
// ============================================================================

fn list_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("FeatureGrid", "Feature grid", "Grid of feature cards")
            .prop("items", PropSchema::array().required().describe("Cards with icon, title and text keys"))
            .prop("columns", PropSchema::number().with_default(json!(3)))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("IconList", "Bullet list", "Vertical list with leading glyphs")
            .prop("items", PropSchema::array().required().describe("Entries with icon and text keys"))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("ChecklistBlock", "Checklist", "List of checked-off points")
            .prop("items", PropSchema::array().required().describe("Plain strings"))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("StepList", "Step list", "Ordered how-it-works steps")
            .prop("steps", PropSchema::array().required().describe("Entries with title and text keys"))
            .prop("title", PropSchema::string())
            .prop("numbered", PropSchema::boolean().with_default(json!(true))),
        ComponentSchema::new("StatsRow", "Stats row", "Row of large key figures")
            .prop("stats", PropSchema::array().required().describe("Entries with value and label keys")),
        ComponentSchema::new("ComparisonTable", "Comparison table", "Column-wise option comparison")
            .prop("columns", PropSchema::array().required())
            .prop("rows", PropSchema::array().required())
            .prop("caption", PropSchema::string()),
    ]
}

// ============================================================================
// Services
// ============================================================================

fn service_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("ServiceList", "Service list", "Overview grid of offered services")
            .prop("services", PropSchema::array().required().describe("Entries with icon, title and description keys"))
            .prop("title", PropSchema::string())
            .prop("subtitle", PropSchema::string()),
        ComponentSchema::new("ServiceDetail", "Service detail", "Long-form description of one service")
            .prop("title", PropSchema::string().required())
            .prop("description", PropSchema::string().required())
            .prop("icon", PropSchema::string().describe("Icon identifier"))
            .prop("features", PropSchema::array().describe("Plain strings")),
        ComponentSchema::new("PriceTable", "Price table", "Tiered pricing cards")
            .prop("tiers", PropSchema::array().required().describe("Entries with name, price and features keys"))
            .prop("title", PropSchema::string())
            .prop("disclaimer", PropSchema::string()),
        ComponentSchema::new("PriceCallout", "Price callout", "Single from-price banner")
            .prop("label", PropSchema::string().required())
            .prop("amount", PropSchema::string().required())
            .prop("unit", PropSchema::string())
            .prop("note", PropSchema::string()),
        ComponentSchema::new("ProcessTimeline", "Process timeline", "Phased project walkthrough")
            .prop("phases", PropSchema::array().required().describe("Entries with title and text keys"))
            .prop("title", PropSchema::string()),
    ]
}

// ============================================================================
// Trust & Social Proof
// ============================================================================

fn trust_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("TestimonialList", "Testimonials", "Customer quotes carousel")
            .prop("testimonials", PropSchema::array().required().describe("Entries with quote and author keys"))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("ReviewScore", "Review score", "Aggregated rating badge")
            .prop("score", PropSchema::number().required())
            .prop("count", PropSchema::number())
            .prop("source", PropSchema::string()),
        ComponentSchema::new("CertificationRow", "Certifications", "Row of certification badges")
            .prop("certifications", PropSchema::array().required().describe("Badges with icon and label keys"))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("PartnerLogos", "Partner logos", "Grid of partner company logos")
            .prop("partners", PropSchema::array().required().describe("Entries with src and alt keys"))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("GuaranteeBox", "Guarantee box", "Warranty or guarantee statement")
            .prop("title", PropSchema::string().required())
            .prop("text", PropSchema::string().required())
            .prop("icon", PropSchema::string().with_default(json!("shield-check")).describe("Icon identifier")),
    ]
}

// ============================================================================
// Conversion
// ============================================================================

fn conversion_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("CallToAction", "Call to action", "Prominent conversion banner")
            .prop("headline", PropSchema::string().required())
            .prop("text", PropSchema::string())
            .prop("buttonLabel", PropSchema::string().with_default(json!("Get in touch")))
            .prop("buttonHref", PropSchema::string().with_default(json!("/contact")))
            .prop("tone", PropSchema::string().with_default(json!("primary"))),
        ComponentSchema::new("ContactForm", "Contact form", "Inquiry form posting to the site inbox")
            .prop("title", PropSchema::string())
            .prop("fields", PropSchema::array().describe("Entries with name, label and kind keys"))
            .prop("submitLabel", PropSchema::string().with_default(json!("Send message")))
            .prop("successMessage", PropSchema::string().with_default(json!("Thank you, we will get back to you shortly."))),
        ComponentSchema::new("PhoneCallout", "Phone callout", "Tap-to-call banner")
            .prop("phoneNumber", PropSchema::string().with_default(json!("{{phoneNumber}}")))
            .prop("phoneHref", PropSchema::string().with_default(json!("{{phoneHref}}")))
            .prop("label", PropSchema::string().with_default(json!("Call us now"))),
        ComponentSchema::new("EmailCallout", "Email callout", "Mail-us banner")
            .prop("emailAddress", PropSchema::string().with_default(json!("{{emailAddress}}")))
            .prop("emailHref", PropSchema::string().with_default(json!("{{emailHref}}")))
            .prop("label", PropSchema::string().with_default(json!("Write to us"))),
        ComponentSchema::new("QuoteRequestBanner", "Quote request", "Request-a-quote strip")
            .prop("headline", PropSchema::string().required())
            .prop("buttonLabel", PropSchema::string().with_default(json!("Request a quote")))
            .prop("buttonHref", PropSchema::string().with_default(json!("/contact"))),
    ]
}

// ============================================================================
// Site & Contact Info
// ============================================================================

fn contact_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("ContactDetails", "Contact details", "Phone, email and address block")
            .prop("phone", PropSchema::string().with_default(json!("{{phoneNumber}}")))
            .prop("email", PropSchema::string().with_default(json!("{{emailAddress}}")))
            .prop("address", PropSchema::string().with_default(json!("{{address.full}}")))
            .prop("openingHours", PropSchema::string().with_default(json!("{{openingHours}}")))
            .prop("title", PropSchema::string()),
        ComponentSchema::new("OpeningHoursTable", "Opening hours", "Weekly opening hours table")
            .prop("hours", PropSchema::array().required().describe("Entries with days and times keys"))
            .prop("note", PropSchema::string()),
        ComponentSchema::new("MapEmbed", "Map embed", "Embedded map of the service area")
            .prop("mapUrl", PropSchema::string().with_default(json!("{{programmaticInstanceMapUrl}}")))
            .prop("title", PropSchema::string())
            .prop("height", PropSchema::number().with_default(json!(400))),
        ComponentSchema::new("SocialLinks", "Social links", "Row of social profile links")
            .prop("title", PropSchema::string())
            .prop("networks", PropSchema::array().describe("Entries with name and url keys")),
        ComponentSchema::new("NavMenu", "Navigation menu", "Inline navigation link list")
            .prop("links", PropSchema::array().required().describe("Entries with label and href keys"))
            .prop("orientation", PropSchema::string().with_default(json!("horizontal"))),
    ]
}

// ============================================================================
// Programmatic Instance Pages
// ============================================================================

fn instance_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("LocalHero", "Local hero", "Hero variant for per-city pages")
            .prop("h1Text", PropSchema::string().required().describe("Main headline"))
            .prop("subtitle", PropSchema::string())
            .prop("backgroundImage", PropSchema::string().describe("Image path or URL")),
        ComponentSchema::new("DistrictList", "District list", "Districts served within the city")
            .prop("districts", PropSchema::string().with_default(json!("{{listOfCityDistricts}}")))
            .prop("title", PropSchema::string())
            .prop("intro", PropSchema::string()),
        ComponentSchema::new("SurroundingCities", "Surrounding cities", "Nearby cities also served")
            .prop("cities", PropSchema::string().with_default(json!("{{listOfSurroundingCities}}")))
            .prop("title", PropSchema::string())
            .prop("intro", PropSchema::string()),
        ComponentSchema::new("ServiceAreaBanner", "Service area banner", "We-operate-here strip")
            .prop("areaName", PropSchema::string().with_default(json!("{{programmaticInstanceName}}")))
            .prop("text", PropSchema::string()),
        ComponentSchema::new("LocalContactBlock", "Local contact", "Per-city branch contact block")
            .prop("address", PropSchema::string().with_default(json!("{{programmaticInstanceAddress}}")))
            .prop("phone", PropSchema::string().with_default(json!("{{phoneNumber}}")))
            .prop("title", PropSchema::string()),
    ]
}

// ============================================================================
// FAQ & Accordion
// ============================================================================

fn faq_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("FaqSection", "FAQ", "Question and answer list")
            .prop("faqs", PropSchema::array().required().describe("Entries with question and answer keys"))
            .prop("title", PropSchema::string().with_default(json!("Frequently asked questions"))),
        ComponentSchema::new("AccordionBlock", "Accordion", "Collapsible content sections")
            .prop("sections", PropSchema::array().required().describe("Entries with title and content keys"))
            .prop("allowMultiple", PropSchema::boolean().with_default(json!(false))),
    ]
}

// ============================================================================
// Tests
// ============================================================================
