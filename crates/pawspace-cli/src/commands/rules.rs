//! Rules command implementation.

use crate::cli::RulesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::load_candidate;
use crate::output::Formatter;
use pawspace_rules::RuleEvaluator;

/// Execute the rules command.
pub fn execute_rules(args: RulesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_rules(&args, config, formatter)?);
    Ok(())
}

fn render_rules(args: &RulesArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let candidate = load_candidate(&args.file, args.booking)?;
    let evaluator = RuleEvaluator::new(config.rules.clone());
    formatter.format_violations(&evaluator.evaluate(&candidate))
}
