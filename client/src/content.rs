//! Static copy for the landing page.
//!
//! All text lives here as `'static` tables so components only decide layout.
//! The section anchors in `NAV_LINKS` must match the `id`s on the sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "ehya\u{2022}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Landings", href: "#features" },
    NavLink { label: "Pages", href: "#testimonial" },
    NavLink { label: "Docs", href: "#docs" },
    NavLink { label: "Help", href: "#contact" },
];

pub const LOGIN_LABEL: &str = "Login";

// =============================================================================
// HERO
// =============================================================================

pub const HERO_HEADLINE: &str = "We help you grow your business faster";
pub const HERO_BODY: &str = "Ehya is the Instagram analytics platform focused on the goals, track engagement, and grow your business.";
pub const HERO_CTA: &str = "Get a free demo";

// =============================================================================
// FEATURES
// =============================================================================

/// A feature card: icon, title, description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "\u{1F4C8}",
        title: "Hashtag Growth",
        desc: "Follow a hashtag growth total posts, videos and images.",
    },
    Feature {
        icon: "\u{1F465}",
        title: "Influencers by Hashtag",
        desc: "Identify the most influential people posting with your hashtag.",
    },
    Feature {
        icon: "\u{270D}\u{FE0F}",
        title: "Most Influential Post",
        desc: "See the most influential posts on hashtag you are following on.",
    },
    Feature {
        icon: "\u{1F4CD}",
        title: "Hashtag Location",
        desc: "Visualize where people are posting using your hashtag made.",
    },
];

// =============================================================================
// TESTIMONIAL
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub heading: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub author_title: &'static str,
    pub stars: u8,
}

pub const TESTIMONIAL: Testimonial = Testimonial {
    heading: "Powering the growth of 100+ business & retailers in Indonesia.",
    quote: "\"With Ehya, we're able to easily track our performance in full detail. It's become an essential tool for us to grow and engage with our audience.\"",
    author: "Jaquon Hart",
    author_title: "Digital Marketing Executive, Hypebeast",
    stars: 5,
};

impl Testimonial {
    /// Filled star glyphs, one per point of the rating.
    #[must_use]
    pub fn star_glyphs(&self) -> String {
        "\u{2605}".repeat(usize::from(self.stars))
    }

    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{} star rating", self.stars)
    }
}

// =============================================================================
// CONTACT
// =============================================================================

pub const CONTACT_HEADING: &str = "Contact Us";
pub const SUBMIT_LABEL: &str = "Send Message";

// =============================================================================
// FOOTER
// =============================================================================

pub const FOOTER_TAGLINE: &str = "Build a modern and creative website with crealand";
pub const COPYRIGHT: &str = "Copyright \u{a9} 2021. Crafted with love.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub symbol: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Google", symbol: "G" },
    SocialLink { label: "Twitter", symbol: "T" },
    SocialLink { label: "Instagram", symbol: "I" },
    SocialLink { label: "LinkedIn", symbol: "L" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "Product",
        links: &["Landingpage", "Features", "Documentation", "Referral Program", "Pricing"],
    },
    FooterColumn {
        heading: "Services",
        links: &["Documentation", "Design", "Themes", "Illustrations", "UI Kit"],
    },
    FooterColumn { heading: "Company", links: &["About", "Terms", "Privacy Policy", "Careers"] },
    FooterColumn { heading: "More", links: &["Documentation", "License", "Changelog"] },
];
