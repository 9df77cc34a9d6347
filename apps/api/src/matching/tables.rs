//! Static skill vocabularies: synonym groups and commonly co-occurring skills.
//!
//! Both tables are plain data. Entries are normalized once on first use and
//! never mutated afterwards, so concurrent readers need no synchronization.
//! Extend the tables here; the matcher does not need to change.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::matching::normalize::normalize;

/// Weight assigned to two spellings of the same skill.
pub const SYNONYM_WEIGHT: f64 = 0.9;

/// Canonical spelling → alternate spellings. The canonical key is a member
/// of its own group.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts"]),
    ("react", &["reactjs", "react.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("node", &["nodejs", "node.js"]),
    ("express", &["expressjs", "express.js"]),
    ("mongodb", &["mongo"]),
    ("postgresql", &["postgres", "psql"]),
    ("python", &["py"]),
    ("c++", &["cpp", "cplusplus"]),
    ("c#", &["csharp", "cs"]),
    ("react native", &["reactnative"]),
    ("machine learning", &["ml", "machinelearning"]),
    ("artificial intelligence", &["ai"]),
    ("css", &["css3"]),
    ("html", &["html5"]),
    ("mysql", &["my-sql"]),
    ("next", &["nextjs", "next.js"]),
    ("nuxt", &["nuxtjs", "nuxt.js"]),
];

/// Skill → skills that commonly appear alongside it. Lookups are symmetric.
const RELATED: &[(&str, &[&str])] = &[
    ("react", &["redux", "react router", "next", "jsx"]),
    ("vue", &["vuex", "vue router", "nuxt"]),
    ("angular", &["rxjs", "typescript", "ngrx"]),
    ("node", &["express", "npm", "javascript"]),
    ("express", &["node", "mongodb", "mongoose"]),
    ("mongodb", &["mongoose", "express", "node"]),
    ("postgresql", &["sql", "sequelize"]),
    ("python", &["django", "flask", "fastapi"]),
    ("django", &["python", "postgresql"]),
    ("flask", &["python"]),
    ("docker", &["kubernetes", "devops"]),
    ("kubernetes", &["docker", "devops"]),
    ("aws", &["cloud", "devops"]),
    ("azure", &["cloud", "devops"]),
    ("gcp", &["google cloud", "cloud", "devops"]),
];

static SYNONYM_GROUPS: LazyLock<Vec<HashSet<String>>> = LazyLock::new(|| {
    SYNONYMS
        .iter()
        .map(|(canonical, alternates)| {
            std::iter::once(*canonical)
                .chain(alternates.iter().copied())
                .map(normalize)
                .collect::<HashSet<String>>()
        })
        .collect()
});

static RELATED_SKILLS: LazyLock<HashMap<String, HashSet<String>>> = LazyLock::new(|| {
    RELATED
        .iter()
        .map(|(skill, related)| {
            (
                normalize(skill),
                related
                    .iter()
                    .copied()
                    .map(normalize)
                    .collect::<HashSet<String>>(),
            )
        })
        .collect()
});

/// Returns [`SYNONYM_WEIGHT`] when both normalized spellings belong to the
/// same synonym group, `None` otherwise. `None` is "no opinion", not a
/// negative verdict.
pub fn synonym_weight(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    SYNONYM_GROUPS
        .iter()
        .any(|group| group.contains(a) && group.contains(b))
        .then_some(SYNONYM_WEIGHT)
}

/// True when either normalized skill lists the other as a related skill.
pub fn are_related(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let lists = |from: &str, to: &str| {
        RELATED_SKILLS
            .get(from)
            .is_some_and(|related| related.contains(to))
    };
    lists(a, b) || lists(b, a)
}
