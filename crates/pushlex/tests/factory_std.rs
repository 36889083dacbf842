#![allow(missing_docs)]
use pushlex::{StdFactory, Token, TokenFactory, TokenValue, Tokenizer};

/// Builds tokens as `kind:value` strings.
struct Tagging;

impl TokenFactory for Tagging {
    type Token = String;

    fn name_token(&self, _original: &str, value: &str) -> String {
        format!("name:{value}")
    }

    fn string_token(&self, _original: &str, value: &str, quote: char) -> String {
        format!("string:{quote}{value}{quote}")
    }

    fn int_token(&self, _original: &str, value: i64) -> String {
        format!("int:{value}")
    }

    fn char_token(&self, _original: &str, value: &str) -> String {
        format!("char:{value}")
    }

    fn symbol_token(&self, _original: &str, value: &str) -> String {
        format!("symbol:{value}")
    }

    fn end_of_file(&self) -> String {
        String::new()
    }

    fn is_end_of_file(&self, token: &String) -> bool {
        token.is_empty()
    }
}

#[test]
fn custom_factory() {
    let tokens = Tokenizer::from_str(Tagging, r#"Two 'rats' in a "sack". ### end"#)
        .to_list()
        .unwrap();
    assert_eq!(
        tokens,
        [
            "name:Two",
            "string:'rats'",
            "name:in",
            "name:a",
            "string:\"sack\"",
            "symbol:.",
        ]
    );
}

#[test]
fn std_factory_builds_tokens() {
    let factory = StdFactory;
    assert_eq!(
        factory.int_token("-007", -7),
        Token {
            original: "-007".into(),
            value: TokenValue::Integer { value: -7 },
        }
    );
    assert_eq!(factory.symbol_token("<=", "<=").to_string(), "symbol <=");
    assert!(factory.is_end_of_file(&factory.end_of_file()));
    assert!(!factory.is_end_of_file(&factory.name_token("eof", "eof")));
}

#[cfg(feature = "serde")]
#[test]
fn tokens_serialize_with_kind_tag() {
    let tokens = Tokenizer::from_str(StdFactory, "x 'y' 1")
        .to_list()
        .unwrap();
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(
        json,
        r#"[{"original":"x","value":{"kind":"name","value":"x"}},{"original":"'y'","value":{"kind":"string","value":"y","quote":"'"}},{"original":"1","value":{"kind":"integer","value":1}}]"#
    );
    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens);
}
