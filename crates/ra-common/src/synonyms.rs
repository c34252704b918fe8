use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Concept clusters used for cross-vocabulary matching. The first entry is
/// the canonical concept name; the slice lists the surface forms treated as
/// equivalent. Multi-word forms are never hit as lookup keys (keywords are
/// single tokens) but still serve as substring probes against resume text.
///
/// The table deliberately spans several resume verticals so the matcher is
/// not specific to software roles.
const DEFAULT_CLUSTERS: &[(&str, &[&str])] = &[
    // Software engineering
    (
        "sql",
        &["sql", "mysql", "postgresql", "postgres", "t-sql", "plsql", "database"],
    ),
    ("python", &["python", "python3", "django", "flask", "pandas"]),
    (
        "javascript",
        &["javascript", "typescript", "node", "nodejs", "react", "angular", "vue"],
    ),
    ("java", &["java", "spring", "springboot", "jvm"]),
    ("cloud", &["cloud", "aws", "azure", "gcp", "amazon web services"]),
    (
        "devops",
        &["devops", "ci/cd", "jenkins", "docker", "kubernetes", "terraform"],
    ),
    ("api", &["api", "rest", "restful", "graphql", "microservices"]),
    (
        "testing",
        &["testing", "qa", "quality assurance", "selenium", "automation"],
    ),
    (
        "machine",
        &["machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn"],
    ),
    (
        "frontend",
        &["frontend", "front-end", "html", "css", "responsive design"],
    ),
    (
        "backend",
        &["backend", "back-end", "server-side", "microservices", "api design"],
    ),
    // Marketing
    (
        "seo",
        &["seo", "search engine optimization", "sem", "google ads", "adwords"],
    ),
    (
        "marketing",
        &["marketing", "branding", "advertising", "campaigns", "social media"],
    ),
    (
        "content",
        &["content", "copywriting", "blogging", "storytelling", "editorial"],
    ),
    (
        "analytics",
        &["analytics", "google analytics", "tableau", "dashboards", "metrics"],
    ),
    // Finance
    (
        "accounting",
        &["accounting", "bookkeeping", "quickbooks", "reconciliation", "ledger"],
    ),
    (
        "finance",
        &["finance", "financial", "budgeting", "forecasting", "variance analysis"],
    ),
    ("audit", &["audit", "auditing", "compliance", "sox", "internal controls"]),
    ("tax", &["tax", "taxation", "gaap", "ifrs"]),
    // HR
    (
        "recruiting",
        &["recruiting", "recruitment", "sourcing", "talent acquisition", "hiring"],
    ),
    (
        "human",
        &["human resources", "hris", "onboarding", "benefits", "employee relations"],
    ),
    ("payroll", &["payroll", "compensation", "adp", "workday"]),
    // Sales
    ("sales", &["sales", "selling", "upselling", "revenue", "quota"]),
    ("crm", &["crm", "salesforce", "hubspot", "pipeline management"]),
    (
        "negotiation",
        &["negotiation", "negotiating", "closing", "prospecting"],
    ),
    // Healthcare
    ("clinical", &["clinical", "patient care", "nursing", "triage", "charting"]),
    ("ehr", &["ehr", "emr", "epic", "cerner", "medical records"]),
    ("healthcare", &["healthcare", "medical", "hipaa", "patient"]),
    // Project management
    ("agile", &["agile", "scrum", "kanban", "sprint", "jira"]),
    (
        "project",
        &["project management", "pmp", "pmo", "roadmap", "milestones"],
    ),
    (
        "leadership",
        &["leadership", "management", "mentoring", "coaching", "supervision"],
    ),
    // General business
    (
        "communication",
        &["communication", "presentation", "writing", "interpersonal"],
    ),
    (
        "excel",
        &["excel", "spreadsheets", "microsoft office", "powerpoint", "pivot tables"],
    ),
    (
        "customer",
        &["customer", "client", "stakeholder", "support", "service"],
    ),
    (
        "reporting",
        &["reporting", "dashboards", "kpi", "metrics", "data visualization"],
    ),
];

/// Immutable keyword-to-cluster mapping. Every surface form (including the
/// canonical name) is indexed, so lookup is a single exact-key probe; no
/// partial or fuzzy matching happens here.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    index: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn from_clusters(clusters: &[(&str, &[&str])]) -> Self {
        let mut index = HashMap::new();

        for (canonical, surface_forms) in clusters {
            let mut forms: Vec<String> = Vec::with_capacity(surface_forms.len() + 1);
            forms.push((*canonical).to_string());
            for form in *surface_forms {
                let form = (*form).to_string();
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }

            for form in &forms {
                index.entry(form.clone()).or_insert_with(|| forms.clone());
            }
        }

        Self { index }
    }

    /// The registered cluster for `keyword`, if any.
    pub fn resolve(&self, keyword: &str) -> Option<&[String]> {
        self.index.get(keyword).map(Vec::as_slice)
    }

    /// Surface forms considered equivalent to `keyword`: the registered
    /// cluster, or the singleton `{keyword}` when none is registered.
    pub fn expand(&self, keyword: &str) -> Vec<String> {
        match self.resolve(keyword) {
            Some(forms) => forms.to_vec(),
            None => vec![keyword.to_string()],
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

static DEFAULT_TABLE: Lazy<SynonymTable> = Lazy::new(|| SynonymTable::from_clusters(DEFAULT_CLUSTERS));

/// Process-wide default table, built once.
pub fn default_table() -> &'static SynonymTable {
    &DEFAULT_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_resolves_cluster() {
        let forms = default_table().expand("sql");
        assert!(forms.contains(&"mysql".to_string()));
        assert!(forms.contains(&"postgres".to_string()));
        assert!(forms.contains(&"database".to_string()));
    }

    #[test]
    fn surface_form_resolves_same_cluster() {
        let via_key = default_table().expand("sql");
        let via_form = default_table().expand("database");
        assert_eq!(via_key, via_form);
    }

    #[test]
    fn unregistered_keyword_expands_to_singleton() {
        assert_eq!(default_table().expand("cobol"), vec!["cobol".to_string()]);
        assert!(default_table().resolve("cobol").is_none());
    }

    #[test]
    fn lookup_is_exact_only() {
        // Neither prefixes nor containment resolve; fuzziness belongs to the
        // matcher, not the table.
        assert!(default_table().resolve("postgr").is_none());
        assert!(default_table().resolve("postgresql12").is_none());
    }

    #[test]
    fn custom_tables_are_injectable() {
        let table = SynonymTable::from_clusters(&[("rust", &["rust", "cargo", "tokio"])]);
        assert_eq!(table.expand("cargo").len(), 3);
        assert!(table.resolve("sql").is_none());
    }

    #[test]
    fn first_cluster_wins_on_shared_forms() {
        let table = SynonymTable::from_clusters(&[
            ("alpha", &["alpha", "shared"]),
            ("beta", &["beta", "shared"]),
        ]);
        assert_eq!(table.expand("shared")[0], "alpha");
    }
}
