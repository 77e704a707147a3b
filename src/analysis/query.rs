use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(
        about = "Predict the win probability of team1 against team2",
        alias = "win"
    )]
    Predict {
        #[arg(required = true)]
        team1: String,
        #[arg(required = true)]
        team2: String,
    },
    #[command(
        about = "Recommend a counter roster against an enemy team",
        alias = "vs"
    )]
    Counter {
        #[arg(required = true)]
        enemy: String,
        #[arg(long)]
        pool: Option<String>,
    },
    #[command(
        about = "Solve the maximin mixture over observed compositions",
        alias = "eq"
    )]
    Equilibrium,
    #[command(about = "Rank heroes by win rate over the snapshot", alias = "top")]
    Heroes {
        #[arg(long, default_value_t = 10)]
        min_games: usize,
    },
    #[command(
        about = "List composition records with equilibrium weights",
        alias = "comps"
    )]
    Compositions {
        #[arg(long, default_value_t = 5)]
        min_games: usize,
    },
}
