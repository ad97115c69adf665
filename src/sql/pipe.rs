//! Linear pipe-syntax renderer.
//!
//! Layout (fixed, byte-exact):
//!
//! ```text
//! FROM base
//! |> SELECT
//!      price,
//!      stock
//! |> AGGREGATE
//!      SUM(stock) AS total
//!    GROUP BY
//!      price
//! |> SELECT *
//! ```
//!
//! A level with aggregates renders as an AGGREGATE stage (GROUP BY clause
//! omitted when the level has no group keys); a pure projection renders as
//! a SELECT stage; a level with nothing to show renders no stage at all.

use super::token::{Token, TokenStream};
use crate::chain::{Aggregate, QueryChain};

pub fn render(chain: &QueryChain) -> String {
    let mut ts = TokenStream::new();

    ts.push(Token::From).space().ident("base");

    for node in &chain.nodes {
        if !node.has_aggregates() && !node.has_group_by() {
            if !node.attributes.is_empty() {
                ts.newline().push(Token::PipeOp).space().push(Token::Select);
                render_idents(&mut ts, &node.attributes);
            }
            continue;
        }

        ts.newline().push(Token::PipeOp).space().push(Token::Aggregate);
        render_aggregates(&mut ts, &node.aggregates);
        if node.has_group_by() {
            ts.newline().indent(3).push(Token::GroupBy);
            render_idents(&mut ts, &node.group_by);
        }
    }

    ts.newline()
        .push(Token::PipeOp)
        .space()
        .push(Token::Select)
        .space()
        .push(Token::Star);

    ts.serialize()
}

fn render_idents(ts: &mut TokenStream, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        ts.newline().indent(5).ident(item);
        if i + 1 < items.len() {
            ts.comma();
        }
    }
}

fn render_aggregates(ts: &mut TokenStream, aggregates: &[Aggregate]) {
    for (i, agg) in aggregates.iter().enumerate() {
        ts.newline()
            .indent(5)
            .push(Token::Func(agg.func))
            .lparen()
            .ident(&agg.column)
            .rparen()
            .space()
            .push(Token::As)
            .space()
            .ident(&agg.alias);
        if i + 1 < aggregates.len() {
            ts.comma();
        }
    }
}
