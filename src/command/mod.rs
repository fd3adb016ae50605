//! Transcript classification
//!
//! [`CommandRouter`] turns a finalized transcript into the set of actions it
//! requests plus exactly one spoken feedback phrase. Matching is plain
//! substring containment over the lowercased transcript; the rule table and
//! site directory are data and can be extended from [`Settings`].
//!
//! [`Settings`]: crate::config::Settings

mod rules;
mod sites;

#[cfg(test)]
mod tests;

pub use rules::{CommandRule, RuleAction, Trigger, builtin_rules};
pub use sites::{LAUNCH_PHRASES, SiteDirectory};

use once_cell::sync::Lazy;

use crate::config::Settings;
use crate::domain::{Action, Feedback, Route, Site};

static BUILTIN_RULES: Lazy<Vec<CommandRule>> = Lazy::new(builtin_rules);

/// Result of classifying one transcript
#[derive(Debug, Clone)]
pub struct Classification {
    /// Actions in firing order; a set destination appears once, last
    pub actions: Vec<Action>,
    /// The navigation slot, if any rule wrote it
    pub destination: Option<Route>,
    /// The single phrase to speak for this transcript
    pub feedback: Feedback,
}

impl Classification {
    /// Whether nothing matched at all
    pub fn is_unrecognized(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Ordered rule table plus site directory
#[derive(Debug, Clone)]
pub struct CommandRouter {
    rules: Vec<CommandRule>,
    sites: SiteDirectory,
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
            sites: SiteDirectory::default(),
        }
    }
}

impl CommandRouter {
    /// Router with the built-in rules and sites
    pub fn new() -> Self {
        Self::default()
    }

    /// Router extended with the extra sites and phrase rules from settings
    ///
    /// Built-in rules always stay present; configured entries are appended
    /// after them, which also means a configured navigation phrase outranks
    /// a built-in one under the last-match-wins destination slot.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut router = Self::new();

        for site in &settings.extra_sites {
            router.sites.add(Site::new(site.name.to_lowercase(), site.url.clone()));
        }

        for rule in &settings.extra_rules {
            let phrases = rule.phrases.iter().map(|p| p.to_lowercase()).collect();
            router
                .rules
                .push(CommandRule::new(Trigger::Any(phrases), RuleAction::Navigate(rule.route)));
        }

        router
    }

    /// Append a rule after the built-ins
    pub fn with_rule(mut self, rule: CommandRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a site to the directory's lookup order
    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.add(site);
        self
    }

    /// Classify a finalized transcript
    ///
    /// Partial transcripts are for display only and must not be passed here.
    pub fn classify(&self, transcript: &str) -> Classification {
        let lowered = transcript.to_lowercase();
        let command = lowered.trim();

        let mut actions = Vec::new();
        let mut destination = None;

        // Site launches are independent of the rule table below.
        if SiteDirectory::is_armed(command) {
            if let Some(site) = self.sites.find_spoken(command) {
                tracing::debug!(site = %site.name, "site launch matched");
                actions.push(Action::OpenSite {
                    url: site.url.clone(),
                });
            }
        }

        for rule in &self.rules {
            if !rule.trigger.matches(command) {
                continue;
            }
            match rule.action {
                // Single overwritten slot: the last matching rule wins.
                RuleAction::Navigate(route) => destination = Some(route),
                RuleAction::ToggleMode => actions.push(Action::ToggleMode),
                RuleAction::ZoomIn => actions.push(Action::ZoomIn),
                RuleAction::ZoomOut => actions.push(Action::ZoomOut),
            }
        }

        let feedback = if destination.is_some() {
            Feedback::Navigating
        } else if actions.is_empty() {
            Feedback::NotUnderstood
        } else {
            Feedback::Completed
        };

        if let Some(route) = destination {
            actions.push(Action::Navigate { route });
        }

        tracing::debug!(
            transcript = command,
            actions = actions.len(),
            ?destination,
            ?feedback,
            "transcript classified"
        );

        Classification {
            actions,
            destination,
            feedback,
        }
    }
}
