//! Nested CTE renderer.
//!
//! Layout (fixed, byte-exact - line numbers feed the error locator):
//!
//! ```text
//! WITH
//! cte_0 AS (
//!   SELECT
//!     price,
//!     SUM(stock) AS total
//!   FROM base
//!   GROUP BY
//!     price
//! ),
//! cte_1 AS (
//!   ...
//! )
//!  SELECT *
//!  FROM cte_1;
//! ```
//!
//! Every level renders as one CTE, `cte_0` being the base level reading the
//! raw `base` table. Bodies are indented two spaces, list items four.

use super::token::{Token, TokenStream};
use crate::chain::{QueryChain, QueryNode};

pub fn render(chain: &QueryChain) -> String {
    let mut ts = TokenStream::new();

    ts.push(Token::With);

    for (i, node) in chain.nodes.iter().enumerate() {
        if i > 0 {
            ts.comma();
        }
        ts.newline();
        let source = match node.source {
            Some(prev) => format!("cte_{prev}"),
            None => "base".to_string(),
        };

        ts.ident(&format!("cte_{i}"))
            .space()
            .push(Token::As)
            .space()
            .lparen()
            .newline();
        render_body(&mut ts, node, &source);
        ts.newline().rparen();
    }

    let last = format!("cte_{}", chain.nodes.len() - 1);
    ts.newline()
        .indent(1)
        .push(Token::Select)
        .space()
        .push(Token::Star)
        .space()
        .newline()
        .indent(1)
        .push(Token::From)
        .space()
        .ident(&last)
        .push(Token::Semicolon);

    ts.serialize()
}

fn render_body(ts: &mut TokenStream, node: &QueryNode, source: &str) {
    ts.indent(2).push(Token::Select);

    let item_count = node.attributes.len() + node.aggregates.len();
    let mut emitted = 0;
    for attr in &node.attributes {
        ts.newline().indent(4).ident(attr);
        emitted += 1;
        if emitted < item_count {
            ts.comma();
        }
    }
    for agg in &node.aggregates {
        ts.newline()
            .indent(4)
            .push(Token::Func(agg.func))
            .lparen()
            .ident(&agg.column)
            .rparen()
            .space()
            .push(Token::As)
            .space()
            .ident(&agg.alias);
        emitted += 1;
        if emitted < item_count {
            ts.comma();
        }
    }

    ts.newline().indent(2).push(Token::From).space().ident(source);

    if node.has_group_by() {
        ts.newline().indent(2).push(Token::GroupBy);
        for (i, col) in node.group_by.iter().enumerate() {
            ts.newline().indent(4).ident(col);
            if i + 1 < node.group_by.len() {
                ts.comma();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{AggFunc, Aggregate};

    fn words(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_only_chain_exact_text() {
        let chain = QueryChain::with_base(words(&["w1", "w2", "w3", "w4", "w5"]));
        let expected = concat!(
            "WITH\n",
            "cte_0 AS (\n",
            "  SELECT\n",
            "    w1,\n",
            "    w2,\n",
            "    w3,\n",
            "    w4,\n",
            "    w5\n",
            "  FROM base\n",
            ")\n",
            " SELECT * \n",
            " FROM cte_0;",
        );
        assert_eq!(render(&chain), expected);
    }

    #[test]
    fn test_aggregating_level_exact_text() {
        let mut chain = QueryChain::with_base(words(&["price", "stock"]));
        chain.push_level(QueryNode {
            attributes: words(&["price"]),
            group_by: words(&["price"]),
            aggregates: vec![Aggregate {
                func: AggFunc::Sum,
                column: "stock".into(),
                alias: "total".into(),
            }],
            ..Default::default()
        });

        let expected = concat!(
            "WITH\n",
            "cte_0 AS (\n",
            "  SELECT\n",
            "    price,\n",
            "    stock\n",
            "  FROM base\n",
            "),\n",
            "cte_1 AS (\n",
            "  SELECT\n",
            "    price,\n",
            "    SUM(stock) AS total\n",
            "  FROM cte_0\n",
            "  GROUP BY\n",
            "    price\n",
            ")\n",
            " SELECT * \n",
            " FROM cte_1;",
        );
        assert_eq!(render(&chain), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut chain = QueryChain::with_base(words(&["a1", "a2", "a3"]));
        chain.push_level(QueryNode {
            attributes: words(&["a1", "a2"]),
            ..Default::default()
        });
        assert_eq!(render(&chain), render(&chain));
    }
}
