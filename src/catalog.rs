//! Static role and stack catalog
//!
//! Built once at process start and shared read-only across requests. Every
//! profile carries a prebuilt case-insensitive keyword automaton so request
//! handling never rebuilds matchers.

use crate::error::{Result, ResumeLensError};
use aho_corasick::AhoCorasick;

/// Sentinel role-hint value meaning "let the classifier decide".
pub const AUTO_DETECT: &str = "auto-detect";

/// Coarse grouping used by the narrative and gap rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFamily {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Ops,
    Data,
    General,
}

impl RoleFamily {
    /// Frontend and Mobile roles get UI-centric wording.
    pub fn is_ui_facing(self) -> bool {
        matches!(self, RoleFamily::Frontend | RoleFamily::Mobile)
    }

    /// Backend and Ops roles get scalability-centric wording.
    pub fn is_server_facing(self) -> bool {
        matches!(self, RoleFamily::Backend | RoleFamily::Ops)
    }

    /// Backend-family and Fullstack-family roles compute skill gaps from the
    /// detected stack's tool list instead of raw role keywords.
    pub fn uses_stack_tools(self) -> bool {
        matches!(self, RoleFamily::Backend | RoleFamily::Fullstack)
    }

    /// Roles whose resumes are expected to show some database vocabulary.
    /// Currently the same families as `uses_stack_tools`, but the narrative
    /// concern is independent of how gap candidates are chosen.
    pub fn expects_database_exposure(self) -> bool {
        matches!(self, RoleFamily::Backend | RoleFamily::Fullstack)
    }
}

/// An ordered, duplicate-free keyword list with a prebuilt substring matcher.
pub struct KeywordSet {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordSet {
    fn new(keywords: &[&str]) -> Result<Self> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .map_err(|e| ResumeLensError::Catalog(format!("failed to build keyword matcher: {}", e)))?;
        Ok(Self { keywords, matcher })
    }

    /// All keywords found as substrings of `text`, in declaration order.
    pub fn matched_in<'a>(&'a self, text: &str) -> Vec<&'a str> {
        let mut hit = vec![false; self.keywords.len()];
        for m in self.matcher.find_overlapping_iter(text) {
            hit[m.pattern().as_usize()] = true;
        }
        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(k, h)| h.then_some(k.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

/// Catalog entry defining a job role's detection keywords and canned feedback.
pub struct RoleProfile {
    pub name: String,
    pub family: RoleFamily,
    pub keywords: KeywordSet,
    /// Generic strengths used when no narrative rule fires.
    pub canned_strengths: Vec<String>,
    /// Stand-in gap labels used when the computed gap set is empty.
    pub canned_missing: Vec<String>,
    pub tip: String,
}

/// Catalog entry defining a technology ecosystem.
pub struct StackProfile {
    pub name: String,
    pub detection: KeywordSet,
    /// Ecosystem tools consulted only for gap calculation.
    pub tools: Vec<String>,
}

/// The immutable role/stack catalog. Constructed once, then only read.
pub struct Catalog {
    roles: Vec<RoleProfile>,
    general_role: RoleProfile,
    stacks: Vec<StackProfile>,
    /// Baseline tool list unioned into every stack-based gap candidate set.
    generic_tools: Vec<String>,
}

impl Catalog {
    /// The built-in catalog. Declaration order matters: exact ties in keyword
    /// density resolve to the first-declared profile.
    pub fn builtin() -> Result<Self> {
        let roles = vec![
            RoleProfile {
                name: "Frontend Engineer".to_string(),
                family: RoleFamily::Frontend,
                keywords: KeywordSet::new(&[
                    "react", "redux", "jest", "vue", "angular", "typescript", "css", "webpack",
                ])?,
                canned_strengths: vec![
                    "Clean presentation of user-facing project work.".to_string(),
                ],
                canned_missing: vec![
                    "Accessibility (WCAG) experience".to_string(),
                    "State management patterns".to_string(),
                    "Modern build tooling exposure".to_string(),
                ],
                tip: "Link a portfolio or deployed demo near the top of your resume; \
                      frontend reviewers click before they read."
                    .to_string(),
            },
            RoleProfile {
                name: "Backend Engineer".to_string(),
                family: RoleFamily::Backend,
                keywords: KeywordSet::new(&[
                    "api", "database", "sql", "rest", "microservices", "server", "backend",
                    "graphql",
                ])?,
                canned_strengths: vec![
                    "Clear articulation of server-side responsibilities.".to_string(),
                ],
                canned_missing: vec![
                    "API design experience".to_string(),
                    "Relational database tuning".to_string(),
                    "Message queue exposure".to_string(),
                ],
                tip: "Quantify scale: request volumes, data sizes, and latency targets carry \
                      more weight than framework lists."
                    .to_string(),
            },
            RoleProfile {
                name: "Fullstack Developer".to_string(),
                family: RoleFamily::Fullstack,
                keywords: KeywordSet::new(&[
                    "fullstack", "full-stack", "react", "node", "express", "mongodb", "api",
                    "javascript",
                ])?,
                canned_strengths: vec![
                    "Breadth across both client and server work.".to_string(),
                ],
                canned_missing: vec![
                    "End-to-end feature ownership examples".to_string(),
                    "Deployment pipeline exposure".to_string(),
                ],
                tip: "Call out one feature you owned end to end, from schema to UI; it is the \
                      strongest fullstack signal."
                    .to_string(),
            },
            RoleProfile {
                name: "Mobile Developer".to_string(),
                family: RoleFamily::Mobile,
                keywords: KeywordSet::new(&[
                    "android", "ios", "swift", "kotlin", "flutter", "react native", "mobile",
                    "xcode",
                ])?,
                canned_strengths: vec![
                    "Platform-specific mobile development experience.".to_string(),
                ],
                canned_missing: vec![
                    "App store release experience".to_string(),
                    "Crash reporting / monitoring exposure".to_string(),
                ],
                tip: "List shipped apps with store links and download or rating figures where \
                      you have them."
                    .to_string(),
            },
            RoleProfile {
                name: "DevOps Engineer".to_string(),
                family: RoleFamily::Ops,
                keywords: KeywordSet::new(&[
                    "docker", "kubernetes", "terraform", "ci/cd", "jenkins", "ansible", "aws",
                    "monitoring",
                ])?,
                canned_strengths: vec![
                    "Hands-on infrastructure automation experience.".to_string(),
                ],
                canned_missing: vec![
                    "Incident response experience".to_string(),
                    "Infrastructure-as-code depth".to_string(),
                ],
                tip: "Describe an outage or migration you handled; reliability war stories \
                      outweigh tool lists."
                    .to_string(),
            },
            RoleProfile {
                name: "Data Scientist".to_string(),
                family: RoleFamily::Data,
                keywords: KeywordSet::new(&[
                    "machine learning", "pandas", "numpy", "tensorflow", "statistics", "etl",
                    "python", "sql",
                ])?,
                canned_strengths: vec![
                    "Analytical toolkit clearly documented.".to_string(),
                ],
                canned_missing: vec![
                    "Model deployment experience".to_string(),
                    "Experiment design exposure".to_string(),
                ],
                tip: "Tie each model to a business metric it moved; accuracy numbers alone \
                      rarely land."
                    .to_string(),
            },
        ];

        let general_role = RoleProfile {
            name: "General Professional".to_string(),
            family: RoleFamily::General,
            keywords: KeywordSet::new(&[
                "communication",
                "leadership",
                "teamwork",
                "project management",
                "problem solving",
                "organization",
                "reporting",
            ])?,
            canned_strengths: vec![
                "Clear and consistent presentation of professional experience.".to_string(),
            ],
            canned_missing: vec![
                "Agile/Scrum Methodology experience".to_string(),
                "Unit Testing / CI-CD pipeline exposure".to_string(),
                "Cloud Infrastructure (AWS/Azure) knowledge".to_string(),
            ],
            tip: "Use a standard font and avoid complex tables or images so Applicant Tracking \
                  Systems can parse your resume cleanly."
                .to_string(),
        };

        let stacks = vec![
            StackProfile {
                name: "JavaScript".to_string(),
                detection: KeywordSet::new(&[
                    "node", "express", "javascript", "typescript", "npm", "nest",
                ])?,
                tools: to_strings(&["express", "nestjs", "graphql", "jest", "prisma", "redis"]),
            },
            StackProfile {
                name: "Python".to_string(),
                detection: KeywordSet::new(&["python", "django", "flask", "fastapi", "pandas"])?,
                tools: to_strings(&["celery", "pytest", "postgresql", "fastapi", "redis"]),
            },
            StackProfile {
                name: "Java".to_string(),
                detection: KeywordSet::new(&["java", "spring", "maven", "hibernate"])?,
                tools: to_strings(&["spring boot", "hibernate", "junit", "kafka", "gradle"]),
            },
            StackProfile {
                name: "Go".to_string(),
                detection: KeywordSet::new(&["golang", "goroutine", "gin", "grpc"])?,
                tools: to_strings(&["grpc", "protobuf", "docker", "kubernetes", "postgresql"]),
            },
        ];

        let generic_tools = to_strings(&["docker", "kubernetes", "aws", "ci/cd", "redis"]);

        Ok(Self {
            roles,
            general_role,
            stacks,
            generic_tools,
        })
    }

    /// Roles eligible for keyword-density detection, in tie-break order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// The designated fallback role when no profile scores above zero.
    pub fn general_role(&self) -> &RoleProfile {
        &self.general_role
    }

    pub fn stacks(&self) -> &[StackProfile] {
        &self.stacks
    }

    pub fn generic_tools(&self) -> &[String] {
        &self.generic_tools
    }

    /// All roles including the General fallback, for hint matching and listing.
    pub fn all_roles(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.iter().chain(std::iter::once(&self.general_role))
    }

    /// Resolve a user-supplied role hint. User intent overrides detection: a
    /// non-sentinel hint that containment-matches a role name (either
    /// direction, case-insensitively) forces that role.
    pub fn role_for_hint(&self, hint: &str) -> Option<&RoleProfile> {
        let hint = hint.trim().to_lowercase();
        if hint.is_empty() || hint == AUTO_DETECT {
            return None;
        }
        self.all_roles().find(|role| {
            let name = role.name.to_lowercase();
            name.contains(&hint) || hint.contains(&name)
        })
    }

    /// Tool list for a detected stack name, falling back to the generic list.
    pub fn stack_tools(&self, stack_name: &str) -> &[String] {
        self.stacks
            .iter()
            .find(|s| s.name == stack_name)
            .map(|s| s.tools.as_slice())
            .unwrap_or(&self.generic_tools)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
