use crate::cases::Case;
use crate::printer::OutputFormat;
use clap::Parser;
use query::{parse_values, ConjunctiveQuery, KeyRange, QueryResult, Strategy};

#[derive(Parser, Debug)]
#[command(
    name = "twocol",
    about = "Answer `a IN (..) AND b IN [lo, hi)` over generated tables with each index strategy"
)]
pub struct Args {
    /// Strategies to run: tree, implicit, composite-tree, composite-hash. Defaults to all.
    #[arg(long = "strategy", value_name = "STRATEGY", value_delimiter = ',')]
    pub strategies: Vec<Strategy>,

    /// Input tables to generate. Defaults to all.
    #[arg(long = "case", value_enum, value_delimiter = ',')]
    pub cases: Vec<Case>,

    /// Values `a` must equal one of.
    #[arg(long, value_name = "V1,V2,...", default_value = "1000,2000,3000")]
    pub equal: String,

    /// Half-open range `b` must fall in.
    #[arg(long, value_name = "LO..HI", default_value = "10..50")]
    pub range: KeyRange,

    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub strategies: Vec<Strategy>,
    pub cases: Vec<Case>,
    pub query: ConjunctiveQuery,
    pub format: OutputFormat,
}

impl Args {
    pub fn run_config(&self) -> QueryResult<RunConfig> {
        let strategies = if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        };
        let cases = if self.cases.is_empty() {
            Case::ALL.to_vec()
        } else {
            self.cases.clone()
        };
        Ok(RunConfig {
            strategies,
            cases,
            query: ConjunctiveQuery::new(parse_values(&self.equal)?, self.range),
            format: self.format,
        })
    }
}
