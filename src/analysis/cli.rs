use super::analysis::Analysis;
use super::query::Query;
use crate::catalog::catalog::Catalog;
use crate::history::record::MatchRecord;
use crate::HeroId;
use clap::Parser;
use std::io::Write;

/// interactive REPL over one loaded snapshot. rosters are entered as
/// comma-separated hero ids.
pub struct CLI(Analysis);

impl CLI {
    pub fn new(catalog: Catalog, history: Vec<MatchRecord>) -> Self {
        Self(Analysis::new(catalog, history))
    }

    pub fn run(&self) {
        log::info!("launching analysis");
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush().unwrap();
            if std::io::stdin().read_line(input).unwrap() == 0 {
                break;
            }
            match input.trim() {
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
    }

    fn handle(&self, input: &str) -> Result<(), Box<dyn std::error::Error>> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Predict { team1, team2 } => {
                let prediction = self
                    .0
                    .predict(&Self::roster(&team1)?, &Self::roster(&team2)?)?;
                println!(
                    "win probability: {:.4} (confidence {:.2})",
                    prediction.win_probability, prediction.confidence
                );
                for (i, key) in prediction.key_matchups.iter().enumerate() {
                    println!(
                        "{:>2}. {:<18} vs {:<18} {:+.4}",
                        i + 1,
                        key.hero1.name,
                        key.hero2.name,
                        key.advantage
                    );
                }
                Ok(())
            }
            Query::Counter { enemy, pool } => {
                let pool = pool.as_deref().map(Self::roster).transpose()?;
                let recommendation = self.0.counter(&Self::roster(&enemy)?, pool.as_deref())?;
                println!(
                    "recommended: {:?} (win probability {:.4})",
                    recommendation.recommended_team, recommendation.win_probability
                );
                for (i, explanation) in recommendation.hero_explanations.iter().enumerate() {
                    println!(
                        "{:>2}. {:<18} value {:+.4} counters {}",
                        i + 1,
                        explanation.name,
                        explanation.overall_value,
                        explanation
                            .counters
                            .iter()
                            .map(|c| c.name.clone())
                            .collect::<Vec<String>>()
                            .join(", ")
                    );
                }
                Ok(())
            }
            Query::Equilibrium => {
                let equilibrium = self.0.equilibrium()?;
                println!("game value: {:+.4}", equilibrium.value());
                for (composition, weight) in equilibrium
                    .compositions()
                    .iter()
                    .zip(equilibrium.weights())
                {
                    println!("{:<24} {:.4}", composition.to_string(), weight);
                }
                Ok(())
            }
            Query::Heroes { min_games } => {
                for (i, hero) in self.0.heroes(min_games).iter().enumerate() {
                    println!(
                        "{:>2}. {:<18} win {:.3} pick {:.3} ({} games)",
                        i + 1,
                        hero.name,
                        hero.win_rate,
                        hero.pick_rate,
                        hero.games
                    );
                }
                Ok(())
            }
            Query::Compositions { min_games } => {
                for (i, record) in self.0.compositions(min_games).iter().enumerate() {
                    println!(
                        "{:>2}. {:<24} win {:.3} ({}-{}) {}",
                        i + 1,
                        record.heroes.to_string(),
                        record.win_rate,
                        record.win_count,
                        record.loss_count,
                        record
                            .equilibrium_value
                            .map(|w| format!("weight {:.4}", w))
                            .unwrap_or_default()
                    );
                }
                Ok(())
            }
        }
    }

    fn roster(input: &str) -> Result<Vec<HeroId>, std::num::ParseIntError> {
        input
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().parse())
            .collect()
    }
}
