//! Candidate ranking and winner selection.
//!
//! Order: compliant before non-compliant, then higher score, then lower price.
//! The sort is stable, so exact ties keep catalog order.

use std::cmp::Ordering;

use rfpmatch_catalog::Product;

use crate::requirements::RequirementSet;
use crate::scoring::{ComplianceScorer, ReasonEntry, ScoredCandidate};

pub const BEST_PRICE_MESSAGE: &str = "Best market price.";
pub const PARTIAL_MATCH_MESSAGE: &str = "Partial Match: Closest available alternative.";
pub const PARTIAL_MATCH_NOTE: &str = "Note: Product does not fully meet all specs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The winner satisfies every stated requirement.
    Full,
    /// Nothing is fully compliant; the winner is the closest candidate.
    Partial,
}

/// The selected winner plus its financial narrative and audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub winner: ScoredCandidate<'a>,
    pub outcome: MatchOutcome,
    pub financial_impact: String,
    pub reasoning: Vec<ReasonEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingEngine {
    scorer: ComplianceScorer,
}

impl RankingEngine {
    pub fn new(scorer: ComplianceScorer) -> Self {
        Self { scorer }
    }

    /// Score every product and order the candidates best-first.
    pub fn rank<'a>(&self, products: &'a [Product], req: &RequirementSet) -> Vec<ScoredCandidate<'a>> {
        let mut ranked: Vec<ScoredCandidate<'a>> =
            products.iter().map(|p| self.scorer.score(p, req)).collect();
        // `sort_by` is stable.
        ranked.sort_by(compare_candidates);
        ranked
    }

    /// Pick the head of a ranked list. `None` only for an empty list.
    pub fn select_winner<'a>(&self, ranked: &[ScoredCandidate<'a>]) -> Option<Selection<'a>> {
        let head = ranked.first()?;

        if head.compliant {
            let most_expensive = ranked
                .iter()
                .filter(|c| c.compliant)
                .map(|c| c.product.price_per_liter())
                .fold(head.product.price_per_liter(), f64::max);
            let savings = most_expensive - head.product.price_per_liter();

            Some(Selection {
                winner: head.clone(),
                outcome: MatchOutcome::Full,
                financial_impact: savings_message(savings),
                reasoning: head.reasons.clone(),
            })
        } else {
            let mut reasoning = head.reasons.clone();
            reasoning.push(ReasonEntry::fail(PARTIAL_MATCH_NOTE));

            Some(Selection {
                winner: head.clone(),
                outcome: MatchOutcome::Partial,
                financial_impact: PARTIAL_MATCH_MESSAGE.to_string(),
                reasoning,
            })
        }
    }
}

fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.compliant
        .cmp(&a.compliant)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| {
            a.product
                .price_per_liter()
                .total_cmp(&b.product.price_per_liter())
        })
}

fn savings_message(savings: f64) -> String {
    if savings > 0.0 {
        format!("Cost Optimization: Saved ${}/L", display_amount(savings))
    } else {
        BEST_PRICE_MESSAGE.to_string()
    }
}

/// Round a positive amount to cents, or to the first non-zero decimal when
/// the amount is below half a cent.
fn display_amount(amount: f64) -> f64 {
    let mut scale = 100.0;
    while scale <= 1e12 {
        let rounded = (amount * scale).round() / scale;
        if rounded > 0.0 {
            return rounded;
        }
        scale *= 10.0;
    }
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpmatch_catalog::ProductSpec;

    fn product(name: &str, visc: f64, salt: f64, price: f64) -> Product {
        Product::new(name, "", price, ProductSpec::new(visc, salt).unwrap()).unwrap()
    }

    fn names<'a>(ranked: &'a [ScoredCandidate<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|c| c.product.name()).collect()
    }

    fn catalog_ab() -> Vec<Product> {
        vec![
            product("A", 120.0, 600.0, 10.0),
            product("B", 90.0, 700.0, 8.0),
        ]
    }

    #[test]
    fn compliant_winner_with_no_pricier_peer_is_best_price() {
        let engine = RankingEngine::default();
        let catalog = catalog_ab();
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        assert_eq!(names(&ranked), vec!["A", "B"]);

        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.winner.product.name(), "A");
        assert_eq!(sel.outcome, MatchOutcome::Full);
        assert_eq!(sel.financial_impact, BEST_PRICE_MESSAGE);
        assert!(sel.reasoning.iter().all(|r| !r.is_fail()));
    }

    #[test]
    fn savings_against_most_expensive_compliant_peer() {
        let engine = RankingEngine::default();
        let catalog = vec![
            product("Premium", 150.0, 900.0, 14.5),
            product("Budget", 110.0, 550.0, 9.0),
            product("Cheapest", 10.0, 10.0, 2.0),
            product("Mid", 130.0, 800.0, 11.0),
        ];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        assert_eq!(names(&ranked), vec!["Budget", "Mid", "Premium", "Cheapest"]);

        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.winner.product.name(), "Budget");
        // Compared against Premium (14.5), not against the non-compliant Cheapest.
        assert_eq!(sel.financial_impact, "Cost Optimization: Saved $5.5/L");
    }

    #[test]
    fn equal_priced_compliant_peers_yield_best_price() {
        let engine = RankingEngine::default();
        let catalog = vec![product("X", 200.0, 900.0, 10.0), product("Y", 150.0, 800.0, 10.0)];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.winner.product.name(), "X");
        assert_eq!(sel.financial_impact, BEST_PRICE_MESSAGE);
    }

    #[test]
    fn savings_are_rounded_to_cents() {
        let engine = RankingEngine::default();
        let catalog = vec![product("X", 200.0, 900.0, 10.1), product("Y", 150.0, 800.0, 12.3)];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.financial_impact, "Cost Optimization: Saved $2.2/L");
    }

    #[test]
    fn sub_cent_price_gap_still_reports_savings() {
        let engine = RankingEngine::default();
        let catalog = vec![product("Cheap", 200.0, 900.0, 10.0), product("Pricier", 150.0, 800.0, 10.004)];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.winner.product.name(), "Cheap");
        assert_eq!(sel.financial_impact, "Cost Optimization: Saved $0.004/L");
    }

    #[test]
    fn display_amount_never_rounds_to_zero() {
        assert_eq!(display_amount(4.0), 4.0);
        assert_eq!(display_amount(12.3 - 10.1), 2.2);
        assert_eq!(display_amount(0.004), 0.004);
        assert_eq!(display_amount(0.0000123), 0.00001);
        assert!(display_amount(1e-300) > 0.0);
    }

    #[test]
    fn no_compliant_candidate_is_partial() {
        let engine = RankingEngine::default();
        let catalog = catalog_ab();
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(200, 0));
        // Both score -50; B is cheaper.
        assert_eq!(names(&ranked), vec!["B", "A"]);

        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.outcome, MatchOutcome::Partial);
        assert_eq!(sel.winner.product.name(), "B");
        assert_eq!(sel.financial_impact, PARTIAL_MATCH_MESSAGE);
        assert_eq!(sel.reasoning.len(), 2);
        assert_eq!(sel.reasoning.last(), Some(&ReasonEntry::fail(PARTIAL_MATCH_NOTE)));
    }

    #[test]
    fn partial_prefers_higher_score_over_price() {
        let engine = RankingEngine::default();
        let catalog = vec![
            product("Cheap", 10.0, 10.0, 1.0),
            product("Close", 300.0, 10.0, 50.0),
        ];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(200, 500));
        let sel = engine.select_winner(&ranked).unwrap();
        assert_eq!(sel.winner.product.name(), "Close");
        assert_eq!(sel.winner.score, 0);
    }

    #[test]
    fn exact_ties_keep_catalog_order() {
        let engine = RankingEngine::default();
        let catalog = vec![
            product("First", 120.0, 600.0, 10.0),
            product("Second", 130.0, 700.0, 10.0),
            product("Third", 140.0, 800.0, 10.0),
        ];
        let ranked = engine.rank(&catalog, &RequirementSet::from_sentinel(100, 500));
        assert_eq!(names(&ranked), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn select_winner_on_empty_list_is_none() {
        assert!(RankingEngine::default().select_winner(&[]).is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        // Coarse prices produce exact ties; fine prices produce sub-cent gaps.
        fn arb_price() -> impl Strategy<Value = f64> {
            prop_oneof![
                (0u32..40).prop_map(|p| f64::from(p) / 2.0),
                (0u32..20_000).prop_map(|p| f64::from(p) / 1000.0),
                (1_000_000u32..1_000_010).prop_map(|p| f64::from(p) / 100_000.0),
            ]
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec((0u32..400, 0u32..1_200, arb_price()), 1..25).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (visc, salt, price))| {
                        product(&format!("P{i}"), f64::from(visc), f64::from(salt), price)
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: ranked output is a total order on (compliance, score, price),
            /// stable for exact ties.
            #[test]
            fn rank_respects_sort_key(catalog in arb_catalog(), visc in 0u64..400, salt in 0u64..1_200) {
                let engine = RankingEngine::default();
                let req = RequirementSet::from_sentinel(visc, salt);
                let ranked = engine.rank(&catalog, &req);
                prop_assert_eq!(ranked.len(), catalog.len());

                let position = |c: &ScoredCandidate<'_>| {
                    catalog.iter().position(|p| std::ptr::eq(p, c.product)).unwrap()
                };

                for pair in ranked.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.compliant >= b.compliant);
                    if a.compliant == b.compliant {
                        prop_assert!(a.score >= b.score);
                        if a.score == b.score {
                            let (pa, pb) = (a.product.price_per_liter(), b.product.price_per_liter());
                            prop_assert!(pa <= pb);
                            if pa == pb {
                                prop_assert!(position(a) < position(b));
                            }
                        }
                    }
                }
            }

            /// Property: a dominating product means a full match; otherwise the
            /// winner is partial and carries at least one failure reason.
            #[test]
            fn outcome_matches_domination(catalog in arb_catalog(), visc in 0u64..400, salt in 0u64..1_200) {
                let engine = RankingEngine::default();
                let req = RequirementSet::from_sentinel(visc, salt);
                let dominated = catalog.iter().any(|p| {
                    req.stated().all(|(f, v)| f.spec_value(p.specs()) >= v as f64)
                });

                let ranked = engine.rank(&catalog, &req);
                let sel = engine.select_winner(&ranked).unwrap();

                if dominated {
                    prop_assert_eq!(sel.outcome, MatchOutcome::Full);
                    prop_assert!(sel.winner.compliant);
                } else {
                    prop_assert_eq!(sel.outcome, MatchOutcome::Partial);
                    prop_assert!(sel.reasoning.iter().any(|r| r.is_fail()));
                    let best = ranked.iter().map(|c| c.score).max().unwrap();
                    prop_assert_eq!(sel.winner.score, best);
                }
            }

            /// Property: savings are only reported when a strictly pricier compliant
            /// alternative exists.
            #[test]
            fn savings_only_with_pricier_compliant_peer(catalog in arb_catalog(), visc in 0u64..400, salt in 0u64..1_200) {
                let engine = RankingEngine::default();
                let req = RequirementSet::from_sentinel(visc, salt);
                let ranked = engine.rank(&catalog, &req);
                let sel = engine.select_winner(&ranked).unwrap();

                if sel.outcome == MatchOutcome::Full {
                    let winner_price = sel.winner.product.price_per_liter();
                    let pricier = ranked.iter().any(|c| c.compliant && c.product.price_per_liter() > winner_price);
                    prop_assert_eq!(sel.financial_impact.starts_with("Cost Optimization"), pricier);
                    prop_assert!(!sel.financial_impact.contains("$0/L"));
                }
            }
        }
    }
}
