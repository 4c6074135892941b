use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, separated, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{CompareOp, Comparison, Condition, Conjunction};

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

// -- Comparisons ------------------------------------------------------------

fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    ws.parse_next(input)?;
    alt((
        "<=".value(CompareOp::Lte),
        ">=".value(CompareOp::Gte),
        "!=".value(CompareOp::Neq),
        "<".value(CompareOp::Lt),
        ">".value(CompareOp::Gt),
        "=".value(CompareOp::Eq),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "comparison operator",
    )))
    .parse_next(input)
}

fn threshold(input: &mut &str) -> ModalResult<i32> {
    ws.parse_next(input)?;
    // Unsigned digits only; a run that overflows i32 is not a condition.
    digit1
        .try_map(|s: &str| s.parse::<i32>())
        .context(StrContext::Expected(StrContextValue::Description(
            "threshold",
        )))
        .parse_next(input)
}

fn comparison(input: &mut &str) -> ModalResult<Comparison> {
    let op = compare_op(input)?;
    let value = threshold(input)?;
    Ok(Comparison::new(op, value))
}

// -- Logical operators (precedence: OR < AND) -------------------------------

fn conjunction(input: &mut &str) -> ModalResult<Conjunction> {
    let comparisons: Vec<Comparison> =
        separated(1.., comparison, (ws, '&')).parse_next(input)?;
    Ok(Conjunction::new(comparisons))
}

pub fn condition(input: &mut &str) -> ModalResult<Condition> {
    let conjunctions: Vec<Conjunction> =
        separated(1.., conjunction, (ws, '|')).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(Condition::new(conjunctions))
}

// -- Percentages ------------------------------------------------------------

pub fn percentage(input: &mut &str) -> ModalResult<f32> {
    ws.parse_next(input)?;
    terminated(
        (opt('-'), digit1, opt(('.', digit1)))
            .take()
            .try_map(|s: &str| s.parse::<f32>()),
        ('%', ws),
    )
    .context(StrContext::Expected(StrContextValue::Description(
        "percentage",
    )))
    .parse_next(input)
}
