//! Content Ranker - Personalized, following and trending orderings.
//!
//! # Algorithm (personalized)
//!
//! For each item: score = project match + keyword matches + style label
//! match + engagement boost, then a stable sort by score descending.
//!
//! # Edge Cases
//! - Empty catalog: empty result in every mode
//! - Profile without a completed quiz: only the engagement boost applies
//! - Missing `project_type` or `style`: that component contributes 0

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::{ContentItem, StyleKeywordTable};
use crate::domain::profile::UserPreferenceProfile;

/// Points for an item whose project type the user declared.
pub const PROJECT_MATCH_POINTS: f64 = 10.0;

/// Points per item tag found in the archetype's keyword set.
pub const KEYWORD_MATCH_POINTS: f64 = 5.0;

/// Points for a style label containing the user's style tag.
pub const STYLE_LABEL_POINTS: f64 = 3.0;

/// Saves count this many times as much as likes in the engagement boost.
pub const SAVE_WEIGHT: u64 = 2;

/// Weighted engagement is divided by this before capping.
pub const ENGAGEMENT_DIVISOR: f64 = 1000.0;

/// Upper bound on the engagement boost.
pub const ENGAGEMENT_CAP: f64 = 5.0;

/// Strategy used to order a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Taste-matched scoring against the user's profile.
    #[default]
    Personalized,
    /// Verified authors only, catalog order.
    Following,
    /// Most liked and saved first; profile ignored.
    Trending,
}

/// Per-component contribution to an item's personalized score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub project_match: f64,
    pub keyword_matches: usize,
    pub keyword_points: f64,
    pub style_match: f64,
    pub engagement_boost: f64,
}

impl ScoreBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.project_match + self.keyword_points + self.style_match + self.engagement_boost
    }

    /// Sum of the components that depend on the profile.
    pub fn taste_score(&self) -> f64 {
        self.project_match + self.keyword_points + self.style_match
    }
}

/// An item reference with its personalized score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a ContentItem,
    pub breakdown: ScoreBreakdown,
}

impl ScoredItem<'_> {
    pub fn score(&self) -> f64 {
        self.breakdown.total()
    }
}

/// Orders content for presentation.
///
/// Stateless apart from the keyword table; every call recomputes from the
/// catalog it is given.
#[derive(Debug, Clone)]
pub struct ContentRanker {
    keywords: Arc<StyleKeywordTable>,
}

impl ContentRanker {
    /// Creates a ranker over a style keyword table.
    pub fn new(keywords: Arc<StyleKeywordTable>) -> Self {
        Self { keywords }
    }

    /// Returns the keyword table in use.
    pub fn keywords(&self) -> &StyleKeywordTable {
        &self.keywords
    }

    /// Orders the catalog under the given mode.
    ///
    /// Sorting is stable: items that compare equal keep catalog order.
    pub fn rank<'a>(
        &self,
        profile: &UserPreferenceProfile,
        catalog: &'a [ContentItem],
        mode: RankingMode,
    ) -> Vec<&'a ContentItem> {
        let ranked: Vec<&ContentItem> = match mode {
            RankingMode::Personalized => self
                .rank_scored(profile, catalog)
                .into_iter()
                .map(|s| s.item)
                .collect(),
            RankingMode::Following => Self::following(catalog),
            RankingMode::Trending => Self::trending(catalog),
        };

        tracing::debug!(
            mode = ?mode,
            catalog_size = catalog.len(),
            ranked = ranked.len(),
            "Catalog ranked"
        );

        ranked
    }

    /// Scores every item against the profile and sorts by score
    /// descending, keeping catalog order for ties.
    pub fn rank_scored<'a>(
        &self,
        profile: &UserPreferenceProfile,
        catalog: &'a [ContentItem],
    ) -> Vec<ScoredItem<'a>> {
        let keywords = self.keyword_set(profile);

        let mut scored: Vec<ScoredItem<'a>> = catalog
            .iter()
            .map(|item| ScoredItem {
                item,
                breakdown: Self::score_with(&keywords, profile, item),
            })
            .collect();

        scored.sort_by(|a, b| b.score().total_cmp(&a.score()));
        scored
    }

    /// Computes the personalized score breakdown for one item.
    pub fn score(&self, profile: &UserPreferenceProfile, item: &ContentItem) -> ScoreBreakdown {
        Self::score_with(&self.keyword_set(profile), profile, item)
    }

    /// Verified items only, in catalog order.
    fn following(catalog: &[ContentItem]) -> Vec<&ContentItem> {
        catalog.iter().filter(|item| item.verified).collect()
    }

    /// Whole catalog by likes plus saves, descending.
    fn trending(catalog: &[ContentItem]) -> Vec<&ContentItem> {
        let mut items: Vec<&ContentItem> = catalog.iter().collect();
        items.sort_by(|a, b| b.engagement.popularity().cmp(&a.engagement.popularity()));
        items
    }

    fn keyword_set(&self, profile: &UserPreferenceProfile) -> HashSet<&str> {
        profile
            .primary_style_tag
            .as_deref()
            .map(|tag| self.keywords.keywords_for(tag))
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn score_with(
        keywords: &HashSet<&str>,
        profile: &UserPreferenceProfile,
        item: &ContentItem,
    ) -> ScoreBreakdown {
        let project_match = match &item.project_type {
            Some(pt) if profile.declared_project_types.contains(pt) => PROJECT_MATCH_POINTS,
            _ => 0.0,
        };

        let keyword_matches = item
            .tags
            .iter()
            .filter(|tag| keywords.contains(tag.to_lowercase().as_str()))
            .count();

        let style_match = match (&item.style, profile.primary_style_tag.as_deref()) {
            (Some(style), Some(tag)) if !tag.is_empty() => {
                if style.to_lowercase().contains(&tag.to_lowercase()) {
                    STYLE_LABEL_POINTS
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        ScoreBreakdown {
            project_match,
            keyword_matches,
            keyword_points: keyword_matches as f64 * KEYWORD_MATCH_POINTS,
            style_match,
            engagement_boost: engagement_boost(item),
        }
    }
}

/// `min(5, (likes + 2 * saves) / 1000)`.
pub fn engagement_boost(item: &ContentItem) -> f64 {
    let weighted = item
        .engagement
        .likes
        .saturating_add(item.engagement.saves.saturating_mul(SAVE_WEIGHT));
    (weighted as f64 / ENGAGEMENT_DIVISOR).min(ENGAGEMENT_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ContentId, Timestamp};
    use crate::domain::ranking::Engagement;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn item(id: &str) -> ContentItem {
        ContentItem::new(ContentId::new(id).unwrap(), Timestamp::from_unix_secs(0).unwrap())
    }

    fn ids<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn modernist_ranker() -> ContentRanker {
        ContentRanker::new(Arc::new(StyleKeywordTable::new([(
            "modernist",
            vec!["modern"],
        )])))
    }

    fn kitchen_modernist() -> UserPreferenceProfile {
        UserPreferenceProfile {
            archetype_name: Some("Modernist".to_string()),
            primary_style_tag: Some("modernist".to_string()),
            declared_project_types: BTreeSet::from(["kitchen".to_string()]),
            onboarding_complete: true,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn project_and_tag_match_outrank_viral_item() {
        let catalog = vec![
            item("item1")
                .with_project_type("kitchen")
                .with_tags(["modern"])
                .with_engagement(Engagement::new(100, 0)),
            item("item2").with_engagement(Engagement::new(5000, 5000)),
        ];
        let ranker = modernist_ranker();
        let profile = kitchen_modernist();

        let scored = ranker.rank_scored(&profile, &catalog);

        assert_eq!(scored[0].item.id.as_str(), "item1");
        assert!(approx(scored[0].score(), 15.1));
        assert_eq!(scored[0].breakdown.project_match, 10.0);
        assert_eq!(scored[0].breakdown.keyword_points, 5.0);
        assert!(approx(scored[0].breakdown.engagement_boost, 0.1));
        assert_eq!(scored[1].item.id.as_str(), "item2");
        assert!(approx(scored[1].score(), 5.0));
    }

    #[test]
    fn engagement_boost_weights_saves_double_and_caps() {
        assert!(approx(engagement_boost(&item("a").with_engagement(Engagement::new(500, 250))), 1.0));
        assert!(approx(engagement_boost(&item("b").with_engagement(Engagement::new(0, 2000))), 4.0));
        assert_eq!(engagement_boost(&item("c").with_engagement(Engagement::new(0, 10_000))), 5.0);
        assert_eq!(engagement_boost(&item("d")), 0.0);
    }

    #[test]
    fn comments_and_shares_do_not_affect_boost() {
        let e = Engagement {
            likes: 0,
            saves: 0,
            comments: 50_000,
            shares: 50_000,
        };
        assert_eq!(engagement_boost(&item("a").with_engagement(e)), 0.0);
    }

    #[test]
    fn each_matching_tag_adds_five_case_insensitively() {
        let ranker = ContentRanker::new(Arc::new(StyleKeywordTable::new([(
            "warm_naturalist",
            vec!["oak", "linen", "rattan"],
        )])));
        let profile = UserPreferenceProfile {
            primary_style_tag: Some("warm_naturalist".to_string()),
            ..UserPreferenceProfile::default()
        };
        let it = item("a").with_tags(["OAK", "Linen", "chrome"]);

        let b = ranker.score(&profile, &it);
        assert_eq!(b.keyword_matches, 2);
        assert_eq!(b.keyword_points, 10.0);
    }

    #[test]
    fn style_label_substring_match_is_case_insensitive() {
        let ranker = modernist_ranker();
        let profile = kitchen_modernist();

        let hit = ranker.score(&profile, &item("a").with_style("Scandi MODERNIST kitchen"));
        let miss = ranker.score(&profile, &item("b").with_style("Modern farmhouse"));

        assert_eq!(hit.style_match, 3.0);
        assert_eq!(miss.style_match, 0.0);
    }

    #[test]
    fn profile_without_quiz_ranks_by_engagement_only() {
        let catalog = vec![
            item("low").with_tags(["modern"]).with_project_type("kitchen"),
            item("high").with_engagement(Engagement::new(3000, 0)),
            item("mid").with_engagement(Engagement::new(1000, 0)).with_style("modernist"),
        ];
        let ranker = modernist_ranker();
        let profile = UserPreferenceProfile::default();

        let scored = ranker.rank_scored(&profile, &catalog);

        for s in &scored {
            assert_eq!(s.breakdown.taste_score(), 0.0);
        }
        let order: Vec<&str> = scored.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn unknown_style_tag_yields_no_keywords() {
        let ranker = modernist_ranker();
        let profile = UserPreferenceProfile {
            primary_style_tag: Some("unheard_of".to_string()),
            ..UserPreferenceProfile::default()
        };
        let b = ranker.score(&profile, &item("a").with_tags(["modern"]));
        assert_eq!(b.keyword_matches, 0);
    }

    #[test]
    fn project_types_are_opaque_strings() {
        let ranker = modernist_ranker();
        let profile = kitchen_modernist();
        let b = ranker.score(&profile, &item("a").with_project_type("Kitchen"));
        assert_eq!(b.project_match, 0.0);
    }

    #[test]
    fn empty_catalog_is_empty_in_every_mode() {
        let ranker = modernist_ranker();
        let profile = kitchen_modernist();
        for mode in [RankingMode::Personalized, RankingMode::Following, RankingMode::Trending] {
            assert!(ranker.rank(&profile, &[], mode).is_empty());
        }
    }

    #[test]
    fn following_keeps_verified_in_catalog_order() {
        let catalog = vec![
            item("a").verified(true).with_engagement(Engagement::new(1, 0)),
            item("b").with_engagement(Engagement::new(9000, 0)),
            item("c").verified(true).with_engagement(Engagement::new(5000, 0)),
        ];
        let ranked = modernist_ranker().rank(&kitchen_modernist(), &catalog, RankingMode::Following);
        assert_eq!(ids(&ranked), vec!["a", "c"]);
    }

    #[test]
    fn trending_sorts_by_likes_plus_saves_stably() {
        let catalog = vec![
            item("a").with_engagement(Engagement::new(10, 0)),
            item("b").with_engagement(Engagement::new(0, 30)),
            item("c").with_engagement(Engagement::new(5, 5)),
            item("d").with_engagement(Engagement::new(20, 10)),
        ];
        let ranked = modernist_ranker().rank(&kitchen_modernist(), &catalog, RankingMode::Trending);
        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn switching_modes_recomputes_from_full_catalog() {
        let catalog = vec![
            item("a").with_engagement(Engagement::new(100, 0)),
            item("b").verified(true),
        ];
        let ranker = modernist_ranker();
        let profile = kitchen_modernist();

        let following = ranker.rank(&profile, &catalog, RankingMode::Following);
        assert_eq!(following.len(), 1);
        let trending = ranker.rank(&profile, &catalog, RankingMode::Trending);
        assert_eq!(ids(&trending), vec!["a", "b"]);
    }

    #[test]
    fn ranking_mode_defaults_to_personalized() {
        assert_eq!(RankingMode::default(), RankingMode::Personalized);
        assert_eq!(serde_json::to_string(&RankingMode::Trending).unwrap(), "\"trending\"");
    }

    fn arb_item(index: usize) -> impl Strategy<Value = ContentItem> {
        (
            prop::collection::btree_set(prop::sample::select(vec!["modern", "oak", "brass", "Modern"]), 0..3),
            prop::option::of(prop::sample::select(vec!["kitchen", "bathroom"])),
            0u64..4000,
            0u64..4000,
            any::<bool>(),
        )
            .prop_map(move |(tags, project, likes, saves, verified)| {
                let mut it = item(&format!("item{}", index))
                    .with_tags(tags)
                    .with_engagement(Engagement::new(likes, saves))
                    .verified(verified);
                it.project_type = project.map(str::to_string);
                it
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<ContentItem>> {
        (0usize..8).prop_flat_map(|n| (0..n).map(arb_item).collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn personalized_sort_is_stable(catalog in arb_catalog()) {
            let ranker = modernist_ranker();
            let profile = kitchen_modernist();
            let scored = ranker.rank_scored(&profile, &catalog);
            let position = |id: &str| catalog.iter().position(|c| c.id.as_str() == id).unwrap();

            for pair in scored.windows(2) {
                prop_assert!(pair[0].score() >= pair[1].score());
                if pair[0].score() == pair[1].score() {
                    prop_assert!(position(pair[0].item.id.as_str()) < position(pair[1].item.id.as_str()));
                }
            }
        }

        #[test]
        fn adding_a_matching_tag_never_lowers_rank(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!catalog.is_empty());
            let ranker = ContentRanker::new(Arc::new(StyleKeywordTable::new([(
                "modernist",
                vec!["modern", "sleek"],
            )])));
            let profile = kitchen_modernist();
            let target = pick.index(catalog.len());

            let mut boosted = catalog.clone();
            boosted[target].tags.insert("sleek".to_string());

            let before = ranker.rank(&profile, &catalog, RankingMode::Personalized);
            let after = ranker.rank(&profile, &boosted, RankingMode::Personalized);
            let target_id = catalog[target].id.as_str();
            let pos_before = before.iter().position(|i| i.id.as_str() == target_id).unwrap();
            let pos_after = after.iter().position(|i| i.id.as_str() == target_id).unwrap();

            prop_assert!(
                ranker.score(&profile, &boosted[target]).total()
                    > ranker.score(&profile, &catalog[target]).total()
            );
            prop_assert!(pos_after <= pos_before);
        }

        #[test]
        fn trending_ignores_profile(catalog in arb_catalog()) {
            let ranker = modernist_ranker();
            let first = kitchen_modernist();
            let second = UserPreferenceProfile {
                primary_style_tag: Some("warm_naturalist".to_string()),
                declared_project_types: BTreeSet::from(["bathroom".to_string()]),
                ..kitchen_modernist()
            };

            let a = ranker.rank(&first, &catalog, RankingMode::Trending);
            let b = ranker.rank(&second, &catalog, RankingMode::Trending);
            prop_assert_eq!(ids(&a), ids(&b));
        }
    }
}
