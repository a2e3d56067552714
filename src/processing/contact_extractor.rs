//! Contact detail and profile link extraction

use crate::processing::document::ContactInfo;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileSite {
    Linkedin,
    Github,
}

impl ProfileSite {
    /// Index into the domain matcher's pattern list.
    fn pattern_index(self) -> usize {
        match self {
            ProfileSite::Linkedin => 0,
            ProfileSite::Github => 1,
        }
    }
}

struct ProfilePattern {
    regex: Regex,
    /// Whole match already carries the site domain. Otherwise capture 1 is a
    /// bare username.
    qualified: bool,
}

impl ProfilePattern {
    fn qualified(pattern: &str) -> Self {
        Self {
            regex: compile(pattern),
            qualified: true,
        }
    }

    fn username(pattern: &str) -> Self {
        Self {
            regex: compile(pattern),
            qualified: false,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid profile pattern")
}

/// Pulls email, phone and profile links out of a resume.
///
/// Profile links resolve in three layers: embedded document hyperlinks
/// first, then literal URLs in the text, then shorthand forms such as
/// "LinkedIn: jane" which are normalized into full profile URLs.
pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    domain_matcher: AhoCorasick,
    linkedin_url_regex: Regex,
    github_url_regex: Regex,
    linkedin_shorthand: Vec<ProfilePattern>,
    github_shorthand: Vec<ProfilePattern>,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("Invalid email regex"),
            phone_regex: Regex::new(r"\+?\d[\d\s\-().]{7,}\d").expect("Invalid phone regex"),
            domain_matcher: AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(["linkedin.com", "github.com"])
                .expect("Invalid domain patterns"),
            linkedin_url_regex: compile(r"(?i)https?://\S*linkedin\.com\S*"),
            github_url_regex: compile(r"(?i)https?://\S*github\.com\S*"),
            linkedin_shorthand: vec![
                ProfilePattern::qualified(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+"),
                ProfilePattern::qualified(r"(?i)linkedin\.com/company/[A-Za-z0-9_-]+"),
                ProfilePattern::qualified(r"(?i)linkedin\.com/[A-Za-z0-9_-]+"),
                ProfilePattern::username(r"(?i)linkedin\s*:\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)linkedin\s*/\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)\bli\s*:\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)\bin/([A-Za-z0-9_-]+)"),
            ],
            github_shorthand: vec![
                ProfilePattern::qualified(r"(?i)github\.com/[A-Za-z0-9_-]+"),
                ProfilePattern::username(r"(?i)github\s*:\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)github\s*/\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)\bgh\s*:\s*([A-Za-z0-9_-]+)"),
                ProfilePattern::username(r"(?i)([A-Za-z0-9-]+)\.github\.io"),
            ],
        }
    }

    /// Extract all contact fields. Email and phone scan the flat view, links
    /// scan the line view plus any embedded hyperlink targets.
    pub fn extract(&self, flat_text: &str, line_text: &str, hyperlinks: &[String]) -> ContactInfo {
        let contact = ContactInfo {
            email: self.extract_email(flat_text),
            phone: self.extract_phone(flat_text),
            linkedin: self.profile_link(hyperlinks, line_text, ProfileSite::Linkedin),
            github: self.profile_link(hyperlinks, line_text, ProfileSite::Github),
        };
        debug!(
            "Contact extraction: email={}, phone={}, linkedin={}, github={}",
            contact.email.is_some(),
            contact.phone.is_some(),
            contact.linkedin.is_some(),
            contact.github.is_some()
        );
        contact
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regex.find(text).map(|m| m.as_str().to_string())
    }

    fn profile_link(
        &self,
        hyperlinks: &[String],
        line_text: &str,
        site: ProfileSite,
    ) -> Option<String> {
        self.link_from_metadata(hyperlinks, site)
            .or_else(|| self.link_from_literal_url(line_text, site))
            .or_else(|| self.link_from_shorthand(line_text, site))
    }

    /// First embedded hyperlink whose target mentions the site's domain.
    fn link_from_metadata(&self, hyperlinks: &[String], site: ProfileSite) -> Option<String> {
        hyperlinks
            .iter()
            .find(|uri| {
                self.domain_matcher
                    .find_iter(uri.as_str())
                    .any(|m| m.pattern().as_usize() == site.pattern_index())
            })
            .cloned()
    }

    fn link_from_literal_url(&self, line_text: &str, site: ProfileSite) -> Option<String> {
        let regex = match site {
            ProfileSite::Linkedin => &self.linkedin_url_regex,
            ProfileSite::Github => &self.github_url_regex,
        };
        regex.find(line_text).map(|m| m.as_str().to_string())
    }

    fn link_from_shorthand(&self, line_text: &str, site: ProfileSite) -> Option<String> {
        let (patterns, base) = match site {
            ProfileSite::Linkedin => (&self.linkedin_shorthand, "linkedin.com/in"),
            ProfileSite::Github => (&self.github_shorthand, "github.com"),
        };

        for pattern in patterns {
            if let Some(captures) = pattern.regex.captures(line_text) {
                let group = if pattern.qualified { 0 } else { 1 };
                if let Some(matched) = captures.get(group) {
                    let link = if pattern.qualified {
                        format!("https://{}", matched.as_str())
                    } else {
                        format!("https://{}/{}", base, matched.as_str())
                    };
                    return Some(link);
                }
            }
        }
        None
    }
}
