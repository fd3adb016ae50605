//! Spoken site directory for external launches

use crate::domain::Site;

/// Phrases that arm the site-launch family ("go to github")
pub const LAUNCH_PHRASES: [&str; 3] = ["go to", "open", "navigate to"];

/// Ordered directory of sites reachable by voice
///
/// Lookup order is declaration order: the first site whose name appears in
/// the transcript wins, so "go to twitter or facebook" resolves to facebook.
#[derive(Debug, Clone)]
pub struct SiteDirectory {
    sites: Vec<Site>,
}

impl Default for SiteDirectory {
    fn default() -> Self {
        Self {
            sites: vec![
                Site::new("google", "https://www.google.com"),
                Site::new("youtube", "https://www.youtube.com"),
                Site::new("facebook", "https://www.facebook.com"),
                Site::new("instagram", "https://www.instagram.com"),
                Site::new("twitter", "https://www.twitter.com"),
                Site::new("threads", "https://www.threads.net"),
                Site::new("jira", "https://www.atlassian.com/software/jira"),
                Site::new("figma", "https://www.figma.com"),
                Site::new("github", "https://www.github.com"),
                Site::new("vercel", "https://www.vercel.com"),
            ],
        }
    }
}

impl SiteDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self { sites: Vec::new() }
    }

    /// Append a site to the lookup order
    pub fn add(&mut self, site: Site) {
        self.sites.push(site);
    }

    /// Whether the transcript contains a launch phrase
    pub fn is_armed(transcript: &str) -> bool {
        LAUNCH_PHRASES.iter().any(|p| transcript.contains(p))
    }

    /// First site whose name appears in the (lowercased) transcript
    pub fn find_spoken(&self, transcript: &str) -> Option<&Site> {
        self.sites
            .iter()
            .find(|site| transcript.contains(site.name.as_str()))
    }

    /// All registered sites in lookup order
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }
}
