use super::response::CompositionRecord;
use super::response::HeroPerformance;
use crate::catalog::catalog::Catalog;
use crate::equilibrium::equilibrium::Equilibrium;
use crate::history::composition::Composition;
use crate::history::record::MatchRecord;
use crate::history::team::Team;
use crate::HeroId;
use std::collections::BTreeMap;

/// per-hero win/loss aggregates in catalog order. heroes with fewer
/// than min_games decided appearances are dropped. pick rate is the
/// share of decided matches featuring the hero.
pub fn heroes(catalog: &Catalog, history: &[MatchRecord], min_games: usize) -> Vec<HeroPerformance> {
    let mut tally: BTreeMap<HeroId, (usize, usize)> = BTreeMap::new();
    let mut total = 0;
    for record in history.iter().filter(|r| r.decided()) {
        total += 1;
        for participant in record.participants.iter() {
            let (games, wins) = tally.entry(participant.hero).or_default();
            *games += 1;
            if participant.team == record.winner {
                *wins += 1;
            }
        }
    }
    catalog
        .heroes()
        .iter()
        .filter_map(|hero| {
            let (games, wins) = tally.get(&hero.id).copied().unwrap_or_default();
            (games >= min_games).then(|| HeroPerformance {
                id: hero.id,
                name: hero.name.clone(),
                games,
                wins,
                losses: games - wins,
                win_rate: wins as f64 / games.max(1) as f64,
                pick_rate: games as f64 / total.max(1) as f64,
            })
        })
        .collect()
}

/// per-composition records over one history snapshot, best win rate
/// first. equilibrium weights are attached when the caller solved one;
/// absent weights stay absent rather than defaulting.
pub fn compositions(
    history: &[MatchRecord],
    equilibrium: Option<&Equilibrium>,
    min_games: usize,
) -> Vec<CompositionRecord> {
    let mut tally: BTreeMap<Composition, (usize, usize)> = BTreeMap::new();
    for record in history.iter().filter(|r| r.decided()) {
        for team in [Team::One, Team::Two] {
            let composition = Composition::from((record, team));
            let (wins, losses) = tally.entry(composition).or_default();
            match team == record.winner {
                true => *wins += 1,
                false => *losses += 1,
            }
        }
    }
    let mut records = tally
        .into_iter()
        .filter(|&(_, (wins, losses))| wins + losses >= min_games)
        .map(|(heroes, (win_count, loss_count))| CompositionRecord {
            equilibrium_value: equilibrium.and_then(|e| e.weight(&heroes)),
            win_rate: win_count as f64 / (win_count + loss_count).max(1) as f64,
            heroes,
            win_count,
            loss_count,
        })
        .collect::<Vec<CompositionRecord>>();
    records.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    records
}
