use plotly_offline::{EngineInclude, PlotlyJs};
use proptest::prelude::*;

fn mixed_case(word: &str, mask: u32) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> i & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn any_casing_of_cdn_selects_cdn_mode(mask in 0u32..8) {
        let value = PlotlyJs::from(mixed_case("cdn", mask));
        prop_assert_eq!(EngineInclude::classify(&value), EngineInclude::Cdn);
    }

    #[test]
    fn any_casing_of_directory_selects_directory_mode(mask in 0u32..512) {
        let value = PlotlyJs::from(mixed_case("directory", mask));
        prop_assert_eq!(EngineInclude::classify(&value), EngineInclude::Directory);
    }

    #[test]
    fn non_keyword_strings_follow_truthiness(text in "[a-zA-Z0-9 _-]{0,16}") {
        prop_assume!(
            !text.eq_ignore_ascii_case("cdn") && !text.eq_ignore_ascii_case("directory")
        );
        let expected = if text.is_empty() {
            EngineInclude::None
        } else {
            EngineInclude::Embed
        };
        prop_assert_eq!(EngineInclude::classify(&PlotlyJs::from(text)), expected);
    }

    #[test]
    fn integers_follow_truthiness(value in any::<i64>()) {
        let expected = if value == 0 {
            EngineInclude::None
        } else {
            EngineInclude::Embed
        };
        prop_assert_eq!(EngineInclude::classify(&PlotlyJs::from(value)), expected);
    }

    #[test]
    fn booleans_follow_truthiness(value in any::<bool>()) {
        let expected = if value {
            EngineInclude::Embed
        } else {
            EngineInclude::None
        };
        prop_assert_eq!(EngineInclude::classify(&PlotlyJs::from(value)), expected);
    }
}
