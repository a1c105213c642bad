#[cfg(test)]
mod verify {
    use groovyfmt::formatting::*;
    use groovyfmt::language::*;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail
    }

    fn token(text: &str) -> CodeBlock {
        CodeBlock::leaf(Tag::Other("identifier".to_string()), text)
    }

    fn block(start: &str, children: Vec<CodeBlock>) -> CodeBlock {
        CodeBlock::new(Tag::Block)
            .with_start(start)
            .with_end("}\n")
            .with_children(children)
    }

    fn root(children: Vec<CodeBlock>) -> CodeBlock {
        CodeBlock::new(Tag::Root).with_children(children)
    }

    #[test]
    fn simple_block_body() {
        let tree = root(vec![block(
            "if (x) {",
            vec![
                CodeBlock::leaf(Tag::Keywords, "return"),
                token("x"),
                CodeBlock::leaf(Tag::Operators, "="),
                token("1"),
            ],
        )]);

        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(&tree),
            trim(
                r#"
if (x) {
  return x = 1
}
                "#
            )
        );
    }

    #[test]
    fn keyword_against_operator_composes_both_hooks() {
        // a keyword directly against an operator stacks two space-inserting
        // hooks on the same junction: the operator pads the preceding text
        // and the keyword's after hook pads the operator, so both spaces
        // land in the output
        let tree = root(vec![block(
            "if (x) {",
            vec![
                CodeBlock::leaf(Tag::Keywords, "return"),
                CodeBlock::leaf(Tag::Operators, "="),
                CodeBlock::leaf(Tag::Keywords, "1"),
            ],
        )]);

        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(&tree),
            "if (x) {\n  return  =  1\n}\n"
        );
    }

    #[test]
    fn nested_blocks_indent_one_level_each() {
        let tree = root(vec![block(
            "pipeline {",
            vec![block(
                "stages {",
                vec![token("sh 'make'")],
            )],
        )]);

        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(&tree),
            trim(
                r#"
pipeline {
  stages {
    sh 'make'
  }
}
                "#
            )
        );
    }

    #[test]
    fn keyword_block_ignores_its_literals() {
        // the bare-brace idiom renders "{" and a padded "}" regardless of
        // what the parser captured as the delimiters
        let tree = root(vec![CodeBlock::new(Tag::KeywordBlock)
            .with_start("begin")
            .with_end("end")
            .with_children(vec![token("echo 'hi'")])]);

        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(&tree),
            trim(
                r#"
{
  echo 'hi'
}
                "#
            )
        );
    }

    #[test]
    fn operators_are_wrap_points_on_overflow() {
        let tree = root(vec![block(
            "x {",
            vec![
                token("aaaaaaaaaaaa"),
                CodeBlock::leaf(Tag::Operators, "+"),
                token("bbbbbbbb"),
            ],
        )]);

        let formatter = Formatter::with_options(FormatterOptions {
            width: 13,
            indent: 2,
        });

        // the operator overflows the thirteen column width, so it is forced
        // onto a new line one level deeper than the block body; the trailing
        // space the operator rule had already appended to the previous token
        // stays behind on the broken line
        assert_eq!(
            formatter.format(&tree),
            "x {\n  aaaaaaaaaaaa \n    + bbbbbbbb\n}\n"
        );
    }

    #[test]
    fn non_breakable_tokens_never_wrap() {
        let tree = root(vec![block(
            "x {",
            vec![
                token("aaaaaaaaaaaa"),
                CodeBlock::leaf(Tag::Delimiters, ","),
                token("bbbbbbbb"),
            ],
        )]);

        let formatter = Formatter::with_options(FormatterOptions {
            width: 13,
            indent: 2,
        });

        // the delimiter and the following token both overflow, but neither
        // is breakable, so the line is left long
        assert_eq!(
            formatter.format(&tree),
            "x {\n  aaaaaaaaaaaa, bbbbbbbb\n}\n"
        );
    }

    #[test]
    fn overflow_check_considers_first_line_only() {
        // Known limitation, preserved deliberately: the width check compares
        // the last accumulated line against the first line of the incoming
        // child, so a multi-line child whose later lines overflow does not
        // trigger a break.
        let tree = root(vec![
            token("12345678"),
            CodeBlock::leaf(Tag::Keywords, "if\nsomethingveryverylong"),
        ]);

        let formatter = Formatter::with_options(FormatterOptions {
            width: 12,
            indent: 2,
        });

        assert_eq!(
            formatter.format(&tree),
            "12345678 if\nsomethingveryverylong"
        );
    }

    #[test]
    fn groups_stay_inline_without_hard_breaks() {
        let inner = CodeBlock::new(Tag::Round)
            .with_start("(")
            .with_end(")")
            .with_children(vec![token(" 'id' ")]);
        let outer = CodeBlock::new(Tag::Round)
            .with_start("(")
            .with_end(")")
            .with_children(vec![inner]);
        let tree = root(vec![token("credentials"), outer]);

        let formatter = Formatter::new();
        assert_eq!(formatter.format(&tree), "credentials(('id'))");
    }

    #[test]
    fn groups_with_sourced_breaks_go_multiline() {
        // a hard break captured inside a direct child's start literal is
        // what flips a round/square group into the block treatment
        let list = CodeBlock::new(Tag::Square)
            .with_start("[")
            .with_end("]")
            .with_children(vec![
                token("\n'a'"),
                CodeBlock::leaf(Tag::Delimiters, ","),
                token("\n'b'"),
            ]);
        let tree = root(vec![
            token("env"),
            CodeBlock::leaf(Tag::Operators, "="),
            list,
        ]);

        let formatter = Formatter::new();
        assert_eq!(formatter.format(&tree), "env = [\n  'a',\n  'b'\n]");
    }

    #[test]
    fn dots_glue_to_their_receiver_mid_line() {
        let tree = root(vec![
            token("sh"),
            CodeBlock::leaf(Tag::Dot, ".trim()"),
        ]);

        let formatter = Formatter::new();
        assert_eq!(formatter.format(&tree), "sh.trim()");
    }

    #[test]
    fn dots_align_one_level_deeper_on_a_fresh_line() {
        let tree = root(vec![
            token("response\n"),
            CodeBlock::leaf(Tag::Dot, ".json()"),
        ]);

        let formatter = Formatter::new();
        assert_eq!(formatter.format(&tree), "response\n  .json()");
    }

    #[test]
    fn unmatched_nodes_contribute_nothing() {
        // a dispatch list without the fallback, so the mystery node has no
        // rule; its empty rendering still flows through the neighbors'
        // spacing callbacks
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(RootRule),
            Box::new(KeywordsRule),
            Box::new(OperatorsRule),
            Box::new(DelimitersRule),
        ];
        let formatter = Formatter::with_rules(rules, FormatterOptions::default());

        let tree = root(vec![
            CodeBlock::leaf(Tag::Keywords, "deploy"),
            CodeBlock::leaf(Tag::Other("mystery".to_string()), "???"),
            CodeBlock::leaf(Tag::Keywords, "now"),
        ]);

        assert_eq!(formatter.format(&tree), "deploy now");
        assert_eq!(
            formatter.take_diagnostics(),
            vec![Diagnostic::UnmatchedNodeType {
                tag: Tag::Other("mystery".to_string())
            }]
        );
    }

    #[test]
    fn formatting_is_stable_on_formatted_input() {
        // a parser run over our own output captures the same structure,
        // with the formatting whitespace now embedded in the literals; both
        // shapes must render byte-identically
        let bare = root(vec![block(
            "pipeline {",
            vec![block(
                "stages {",
                vec![token("sh 'make'")],
            )],
        )]);
        let sourced = root(vec![block(
            "pipeline {",
            vec![block(
                "stages {",
                vec![token("\nsh 'make'\n")],
            )],
        )]);

        let formatter = Formatter::new();
        let first = formatter.format(&bare);
        let second = formatter.format(&sourced);
        assert_eq!(first, second);
        assert_eq!(first, formatter.format(&bare));
    }

    #[test]
    fn indent_width_is_configurable() {
        let tree = root(vec![block(
            "node {",
            vec![token("checkout scm")],
        )]);

        let formatter = Formatter::with_options(FormatterOptions {
            width: 80,
            indent: 4,
        });
        assert_eq!(
            formatter.format(&tree),
            trim(
                r#"
node {
    checkout scm
}
                "#
            )
        );
    }
}
