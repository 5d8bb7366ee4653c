//! Content store - loads the JSON fixtures once at startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{
    AboutData, AuthData, BlogData, BlogPost, FeaturesData, PricingData, TestimonialsData,
};

/// All page content, deserialized from the content directory.
///
/// Missing or malformed fixtures fail startup with context; there is no
/// partial-content mode.
#[derive(Debug)]
pub struct ContentStore {
    blog: BlogData,
    pricing: PricingData,
    about: AboutData,
    testimonials: TestimonialsData,
    features: FeaturesData,
    auth: AuthData,
}

impl ContentStore {
    /// Load every fixture from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let store = Self {
            blog: load_fixture(dir, "blog.json")?,
            pricing: load_fixture(dir, "pricing.json")?,
            about: load_fixture(dir, "about.json")?,
            testimonials: load_fixture(dir, "testimonials.json")?,
            features: load_fixture(dir, "features.json")?,
            auth: load_fixture(dir, "auth.json")?,
        };

        debug!(
            posts = store.blog.blog_posts.len(),
            plans = store.pricing.plans.len(),
            team = store.about.team.len(),
            "content fixtures loaded"
        );

        Ok(store)
    }

    pub fn blog(&self) -> &BlogData {
        &self.blog
    }

    pub fn pricing(&self) -> &PricingData {
        &self.pricing
    }

    pub fn about(&self) -> &AboutData {
        &self.about
    }

    pub fn testimonials(&self) -> &TestimonialsData {
        &self.testimonials
    }

    pub fn features(&self) -> &FeaturesData {
        &self.features
    }

    pub fn auth(&self) -> &AuthData {
        &self.auth
    }

    /// Find a post by slug, scanning the regular listing before the
    /// featured post.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog
            .blog_posts
            .iter()
            .chain(self.blog.featured_post.as_ref())
            .find(|post| post.slug == slug)
    }
}

fn load_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read content fixture {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse content fixture {}", path.display()))
}
