//! Core domain types for the mentor marketplace.
//!
//! These are read-only snapshots of the records owned by the data layer.
//! The ranking engine never mutates them; it only reads a snapshot for the
//! duration of one request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a mentor profile
pub type MentorId = String;

/// Unique identifier for a company profile
pub type CompanyId = String;

// =============================================================================
// Mentor-related Types
// =============================================================================

/// Ordinal experience tier of a mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seniority {
    Junior,
    Pleno,
    Senior,
    Staff,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "JUNIOR",
            Seniority::Pleno => "PLENO",
            Seniority::Senior => "SENIOR",
            Seniority::Staff => "STAFF",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JUNIOR" => Ok(Seniority::Junior),
            "PLENO" => Ok(Seniority::Pleno),
            "SENIOR" => Ok(Seniority::Senior),
            "STAFF" => Ok(Seniority::Staff),
            other => Err(format!("unknown seniority: {other}")),
        }
    }
}

/// A mentor profile as seen by the ranking engine.
///
/// `rating` and `total_reviews` are optional because a freshly approved
/// mentor has neither; scoring treats a missing value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Lowercase technology tags, in the order the mentor listed them
    #[serde(default)]
    pub stacks: Vec<String>,
    pub seniority: Seniority,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub availability_hours_per_week: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
    #[serde(default)]
    pub is_approved: bool,
    /// Whether the owning user account is active
    #[serde(default = "default_true")]
    pub user_active: bool,
    #[serde(default)]
    pub total_mentorships: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mentor {
    /// Rating with a missing value read as 0
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Review count with a missing value read as 0
    pub fn reviews_or_zero(&self) -> u32 {
        self.total_reviews.unwrap_or(0)
    }

    /// Case-insensitive check for a single stack tag
    pub fn has_stack(&self, stack: &str) -> bool {
        self.stacks.iter().any(|s| s.eq_ignore_ascii_case(stack))
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Company-related Types
// =============================================================================

/// A company looking for mentors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    /// Lowercase stacks the company wants its learners trained in
    #[serde(default)]
    pub required_stacks: Vec<String>,
    /// How many learners the company plans to enroll
    #[serde(default)]
    pub planned_learners: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Catalog - in-memory snapshot of the data layer
// =============================================================================

/// Holds every mentor and company plus a stack index.
///
/// Primary maps are `BTreeMap`s so that iteration happens in ascending id
/// order, which is the tie-break every consumer relies on.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) mentors: BTreeMap<MentorId, Mentor>,
    pub(crate) companies: BTreeMap<CompanyId, Company>,

    /// Mentor ids grouped by stack tag
    pub(crate) stack_index: HashMap<String, Vec<MentorId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            mentors: BTreeMap::new(),
            companies: BTreeMap::new(),
            stack_index: HashMap::new(),
        }
    }

    pub fn get_mentor(&self, id: &str) -> Option<&Mentor> {
        self.mentors.get(id)
    }

    pub fn get_company(&self, id: &str) -> Option<&Company> {
        self.companies.get(id)
    }

    /// All mentors in ascending id order
    pub fn mentors(&self) -> impl Iterator<Item = &Mentor> {
        self.mentors.values()
    }

    /// All companies in ascending id order
    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.values()
    }

    /// Ids of mentors tagged with `stack` (exact lowercase match)
    pub fn get_mentors_by_stack(&self, stack: &str) -> &[MentorId] {
        self.stack_index
            .get(stack)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Insert a mentor, normalizing its stack tags.
    ///
    /// Replaces any mentor with the same id. Call `build_stack_index`
    /// afterwards to refresh the secondary index.
    pub fn insert_mentor(&mut self, mut mentor: Mentor) {
        mentor.stacks = normalize_stacks(&mentor.stacks);
        self.mentors.insert(mentor.id.clone(), mentor);
    }

    /// Insert a company, normalizing its required stacks
    pub fn insert_company(&mut self, mut company: Company) {
        company.required_stacks = normalize_stacks(&company.required_stacks);
        self.companies.insert(company.id.clone(), company);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.mentors.len(), self.companies.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, trim and deduplicate stack tags, keeping first-seen order.
pub fn normalize_stacks(stacks: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(stacks.len());
    for stack in stacks {
        let tag = stack.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
