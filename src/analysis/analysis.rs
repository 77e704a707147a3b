use super::response::CompositionRecord;
use super::response::Countered;
use super::response::Explanation;
use super::response::Favors;
use super::response::HeroPerformance;
use super::response::HeroRef;
use super::response::KeyMatchup;
use super::response::Prediction;
use super::response::Recommendation;
use super::stats;
use crate::catalog::catalog::Catalog;
use crate::equilibrium::equilibrium::Equilibrium;
use crate::equilibrium::payoff::Payoffs;
use crate::error::Error;
use crate::history::record::MatchRecord;
use crate::matchup::matrix::Matchups;
use crate::HeroId;
use crate::CONFIDENCE_SATURATION;
use crate::KEY_MATCHUP_LIMIT;
use crate::KEY_MATCHUP_THRESHOLD;
use crate::TEAM_SIZE;

/// facade over one immutable snapshot of catalog and match history.
/// every operation rebuilds its matrix from the snapshot, so results
/// depend on nothing but the snapshot itself; caching belongs to the
/// caller, keyed however the caller fingerprints its data.
pub struct Analysis {
    catalog: Catalog,
    history: Vec<MatchRecord>,
}

impl Analysis {
    pub fn new(catalog: Catalog, history: Vec<MatchRecord>) -> Self {
        log::info!(
            "{:<32}{:<32}",
            "loading analysis snapshot",
            format!("{} heroes, {} matches", catalog.len(), history.len())
        );
        Self { catalog, history }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// win probability of team1 over team2, with the significant
    /// hero-versus-hero edges and a data-volume confidence attached.
    pub fn predict(&self, team1: &[HeroId], team2: &[HeroId]) -> Result<Prediction, Error> {
        let matchups = Matchups::try_from((&self.catalog, self.history.as_slice()))?;
        let win_probability = matchups.predict(team1, team2)?;
        let mut key_matchups = Vec::new();
        for &a in team1 {
            for &b in team2 {
                let advantage = matchups.advantage(a, b)?;
                if advantage.abs() > KEY_MATCHUP_THRESHOLD {
                    key_matchups.push(KeyMatchup {
                        hero1: HeroRef {
                            id: a,
                            name: self.catalog.name(a),
                        },
                        hero2: HeroRef {
                            id: b,
                            name: self.catalog.name(b),
                        },
                        advantage,
                        favors: match advantage > 0. {
                            true => Favors::Team1,
                            false => Favors::Team2,
                        },
                    });
                }
            }
        }
        key_matchups.sort_by(|x, y| y.advantage.abs().total_cmp(&x.advantage.abs()));
        key_matchups.truncate(KEY_MATCHUP_LIMIT);
        Ok(Prediction {
            win_probability,
            confidence: self.confidence(team1, team2),
            key_matchups,
        })
    }

    /// counter roster against the enemy team, drawn from the given
    /// pool or the whole catalog, with per-hero explanations of which
    /// enemies each pick counters.
    pub fn counter(
        &self,
        enemy: &[HeroId],
        pool: Option<&[HeroId]>,
    ) -> Result<Recommendation, Error> {
        for &e in enemy {
            self.catalog.index(e)?;
        }
        let matchups = Matchups::try_from((&self.catalog, self.history.as_slice()))?;
        let pool = match pool {
            Some(pool) => pool.to_vec(),
            None => self.catalog.ids(),
        };
        let recommended_team = matchups.counters(enemy, &pool, TEAM_SIZE)?;
        let win_probability = matchups.predict(&recommended_team, enemy)?;
        let mut hero_explanations = Vec::new();
        for &hero in recommended_team.iter() {
            let mut counters = Vec::new();
            for &e in enemy {
                let advantage = matchups.advantage(hero, e)?;
                if advantage > KEY_MATCHUP_THRESHOLD {
                    counters.push(Countered {
                        id: e,
                        name: self.catalog.name(e),
                        advantage,
                    });
                }
            }
            hero_explanations.push(Explanation {
                overall_value: counters.iter().map(|c| c.advantage).sum(),
                id: hero,
                name: self.catalog.name(hero),
                counters,
            });
        }
        hero_explanations.sort_by(|x, y| y.overall_value.total_cmp(&x.overall_value));
        Ok(Recommendation {
            recommended_team,
            win_probability,
            hero_explanations,
        })
    }

    /// maximin mixture over the snapshot's observed compositions.
    pub fn equilibrium(&self) -> Result<Equilibrium, Error> {
        Equilibrium::try_from(&Payoffs::try_from(self.history.as_slice())?)
    }

    pub fn heroes(&self, min_games: usize) -> Vec<HeroPerformance> {
        stats::heroes(&self.catalog, &self.history, min_games)
    }

    /// per-composition records with equilibrium weights attached when
    /// the program is feasible; infeasibility leaves them absent and
    /// the fallback policy to the caller.
    pub fn compositions(&self, min_games: usize) -> Vec<CompositionRecord> {
        let equilibrium = self.equilibrium().ok();
        stats::compositions(&self.history, equilibrium.as_ref(), min_games)
    }

    /// share of matches featuring heroes from both rosters, saturating
    /// at the volume where more data stops adding conviction.
    fn confidence(&self, team1: &[HeroId], team2: &[HeroId]) -> f64 {
        let relevant = self
            .history
            .iter()
            .filter(|record| {
                record.participants.iter().any(|p| team1.contains(&p.hero))
                    && record.participants.iter().any(|p| team2.contains(&p.hero))
            })
            .count();
        (relevant as f64 / CONFIDENCE_SATURATION).min(1.)
    }
}
