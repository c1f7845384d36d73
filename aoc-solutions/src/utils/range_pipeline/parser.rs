use std::str::FromStr;

use super::error::PipelineError;
use super::pipeline::Pipeline;
use super::stage::{Rule, Stage};

/// Suffix marking a stage header line, e.g. `seed-to-soil map:`
const STAGE_SUFFIX: &str = "map:";

/// Parses everything after the first blank-line-delimited block, which is a
/// header owned by the caller.
impl FromStr for Pipeline {
    type Err = PipelineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines = numbered_lines(input)
            .skip_while(|(_, line)| line.is_empty())
            .skip_while(|(_, line)| !line.is_empty());
        parse_stages(lines)
    }
}

/// Trimmed lines paired with their 1-based line number
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
}

/// Build a pipeline from stage blocks.
///
/// Each stage starts with a `<name> map:` line followed by rows of
/// `destination source length`. Blank lines are ignored. A stage with no
/// rows is kept as an identity stage.
pub fn parse_stages<'a, I>(lines: I) -> Result<Pipeline, PipelineError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut stages = Vec::new();
    let mut current: Option<(&str, Vec<Rule>)> = None;

    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_suffix(STAGE_SUFFIX) {
            if let Some((name, rules)) = current.take() {
                stages.push(Stage::new(name, rules));
            }
            current = Some((header.trim_end(), Vec::new()));
            continue;
        }

        let (_, rules) = current
            .as_mut()
            .ok_or(PipelineError::MissingStageHeader { line: line_no })?;
        rules.push(parse_rule(line_no, line)?);
    }

    if let Some((name, rules)) = current {
        stages.push(Stage::new(name, rules));
    }

    log::debug!("parsed {} stages", stages.len());
    Ok(Pipeline::new(stages))
}

fn parse_rule(line: usize, text: &str) -> Result<Rule, PipelineError> {
    let fields = text
        .split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|source| PipelineError::InvalidNumber {
                line,
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [destination, source, length] = fields[..] else {
        return Err(PipelineError::FieldCount {
            line,
            found: fields.len(),
        });
    };
    Rule::new(destination, source, length).ok_or(PipelineError::RuleOverflow { line })
}
