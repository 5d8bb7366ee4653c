//! Content fixture models.
//!
//! Field names map to the camelCase keys of the JSON fixtures, which keep
//! the original data layer's shape (`blogPosts`, `readTime`, ...).

use serde::{Deserialize, Serialize};

/// A blog post record. `body` is Markdown, rendered at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub image: String,
    pub category: String,
    pub read_time: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body: String,
}

/// The blog fixture: one optional featured post plus the regular listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogData {
    #[serde(default)]
    pub featured_post: Option<BlogPost>,
    pub blog_posts: Vec<BlogPost>,
}

/// A pricing plan card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub monthly_price: String,
    pub annual_price: String,
    pub features: Vec<String>,
    pub cta_text: String,
}

/// A frequently-asked question on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    pub plans: Vec<PricingPlan>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// A team member on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// An open position listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpening {
    pub position: String,
    pub department: String,
    pub location: String,
    pub commitment: String,
}

/// A department filter tab for the open positions section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub jobs: Vec<JobOpening>,
    #[serde(default)]
    pub job_categories: Vec<JobCategory>,
}

/// A customer testimonial card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub time: String,
}

/// Testimonials shown immediately vs. behind the "show more" control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsData {
    pub initial_testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub hidden_testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandLogo {
    pub name: String,
    pub image: String,
}

/// A "why us" card on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhyUsCard {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub image: String,
}

/// A tab in the product features section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureTab {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesData {
    #[serde(default)]
    pub brand_logos: Vec<BrandLogo>,
    pub why_us_cards: Vec<WhyUsCard>,
    #[serde(default)]
    pub secure_access_features: Vec<String>,
    #[serde(default)]
    pub billing_tabs: Vec<FeatureTab>,
}

/// A social sign-in button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProvider {
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedCompany {
    pub name: String,
    pub logo: String,
}

/// Copy for one auth page (login or register).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCopy {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub social_providers: Vec<SocialProvider>,
    #[serde(default)]
    pub divider_text: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub trusted_companies: Vec<TrustedCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub login: AuthCopy,
    pub register: AuthCopy,
}
