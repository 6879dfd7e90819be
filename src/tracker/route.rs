use std::collections::BTreeMap;

use serde::Serialize;
use url::form_urlencoded;

pub const DEFAULT_PATH: &str = "/dashboard";

/// A navigation fragment split into its path and decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl Location {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse `<path>?<query>`. A leading `#` is ignored and an empty fragment
/// means the dashboard. Repeated keys keep their last value.
pub fn parse_location(raw: &str) -> Location {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let raw = if raw.is_empty() { DEFAULT_PATH } else { raw };
    let (path, query) = match raw.split_once('?') {
        Some((path, query)) => (path, query),
        None => (raw, ""),
    };
    let params = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    Location {
        path: path.to_string(),
        params,
    }
}

/// Views the application can show, with their typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Concepts { plan_id: Option<String> },
    Concept { plan_id: Option<String>, topic: Option<String> },
    ConceptDetail { plan_id: Option<String>, topic: Option<String> },
    ConceptPractice { plan_id: Option<String>, topic: Option<String> },
    Study { plan_id: Option<String> },
    Quiz { plan_id: Option<String> },
    Report { plan_id: Option<String> },
}

type RouteBuilder = fn(Option<String>, Option<String>) -> Route;

// Matched by prefix, top to bottom: "/concepts" and the "/concept-*" views
// must come before "/concept".
const ROUTES: &[(&str, RouteBuilder)] = &[
    ("/concepts", |plan_id, _| Route::Concepts { plan_id }),
    ("/concept-detail", |plan_id, topic| Route::ConceptDetail { plan_id, topic }),
    ("/concept-practice", |plan_id, topic| Route::ConceptPractice { plan_id, topic }),
    ("/concept", |plan_id, topic| Route::Concept { plan_id, topic }),
    ("/study", |plan_id, _| Route::Study { plan_id }),
    ("/quiz", |plan_id, _| Route::Quiz { plan_id }),
    ("/report", |plan_id, _| Route::Report { plan_id }),
];

impl Route {
    /// Resolve a location against the route table. Unknown paths land on the dashboard.
    pub fn resolve(location: &Location) -> Self {
        let plan_id = location.param("id").map(str::to_string);
        let topic = location.param("topic").map(str::to_string);
        ROUTES
            .iter()
            .find(|(prefix, _)| location.path.starts_with(prefix))
            .map(|(_, build)| build(plan_id, topic))
            .unwrap_or(Route::Dashboard)
    }

    pub fn parse(raw: &str) -> Self {
        Self::resolve(&parse_location(raw))
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => DEFAULT_PATH,
            Self::Concepts { .. } => "/concepts",
            Self::Concept { .. } => "/concept",
            Self::ConceptDetail { .. } => "/concept-detail",
            Self::ConceptPractice { .. } => "/concept-practice",
            Self::Study { .. } => "/study",
            Self::Quiz { .. } => "/quiz",
            Self::Report { .. } => "/report",
        }
    }

    pub fn plan_id(&self) -> Option<&str> {
        match self {
            Self::Dashboard => None,
            Self::Concepts { plan_id }
            | Self::Concept { plan_id, .. }
            | Self::ConceptDetail { plan_id, .. }
            | Self::ConceptPractice { plan_id, .. }
            | Self::Study { plan_id }
            | Self::Quiz { plan_id }
            | Self::Report { plan_id } => plan_id.as_deref(),
        }
    }

    pub fn topic(&self) -> Option<&str> {
        match self {
            Self::Concept { topic, .. }
            | Self::ConceptDetail { topic, .. }
            | Self::ConceptPractice { topic, .. } => topic.as_deref(),
            _ => None,
        }
    }

    /// Render back to a `#<path>?id=..&topic=..` fragment.
    pub fn to_fragment(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(id) = self.plan_id() {
            query.append_pair("id", id);
        }
        if let Some(topic) = self.topic() {
            query.append_pair("topic", topic);
        }
        let query = query.finish();
        if query.is_empty() {
            format!("#{}", self.path())
        } else {
            format!("#{}?{}", self.path(), query)
        }
    }
}
