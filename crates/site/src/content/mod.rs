//! Static content backing the pages.
//!
//! All page copy that is data rather than layout lives in JSON fixtures
//! under the content directory, loaded once at startup into a
//! [`ContentStore`] and read-only thereafter.

mod model;
mod store;

pub use model::{
    AboutData, AuthCopy, AuthData, BlogData, BlogPost, BrandLogo, Faq, FeatureTab, FeaturesData,
    JobCategory, JobOpening, PricingData, PricingPlan, SocialProvider, TeamMember, Testimonial,
    TestimonialsData, TrustedCompany, WhyUsCard,
};
pub use store::ContentStore;
