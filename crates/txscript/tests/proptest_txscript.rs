use proptest::prelude::*;

use txscript::disasm::{disassemble, DISASM_ERROR};
use txscript::opcodes::OP_PUSHDATA4;
use txscript::standard::get_script_class;
use txscript::tokenizer::{check_script_parses, tokenize};
use txscript::{Script, ScriptNum};

#[derive(Clone, Debug)]
enum Piece {
    Push(Vec<u8>),
    Op(u8),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..=2048).prop_map(Piece::Push),
        ((OP_PUSHDATA4 + 1)..=u8::MAX).prop_map(Piece::Op),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn script_num_encode_decode_roundtrip(val in -0x7FFFFFFFi64..=0x7FFFFFFFi64) {
        let bytes = ScriptNum(val).to_bytes();
        prop_assert!(bytes.len() <= 4);
        let back = ScriptNum::from_bytes(&bytes, 4, true).unwrap();
        prop_assert_eq!(back.0, val);
    }

    #[test]
    fn tokenizer_consumes_whole_script(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let parsed = tokenize(0, &data);
        prop_assert_eq!(parsed.is_ok(), check_script_parses(0, &data).is_ok());
        if let Ok(tokens) = parsed {
            let consumed: usize = tokens.iter().map(|t| t.raw_len).sum();
            prop_assert_eq!(consumed, data.len());
            // Tokenizing again yields the same tokens.
            prop_assert_eq!(tokenize(0, &data).unwrap(), tokens);
        }
    }

    #[test]
    fn disassembly_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let first = disassemble(0, &data, false);
        prop_assert_eq!(&first, &disassemble(0, &data, false));
        let failed = check_script_parses(0, &data).is_err();
        prop_assert_eq!(first.ends_with(DISASM_ERROR), failed);
    }

    #[test]
    fn classifier_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..512),
        version in any::<u16>(),
        treasury in any::<bool>(),
    ) {
        let _ = get_script_class(version, &data, treasury);
    }

    #[test]
    fn short_form_roundtrip(pieces in prop::collection::vec(piece(), 0..8)) {
        let mut script = Script::new();
        for piece in &pieces {
            match piece {
                Piece::Push(data) => script.append_push_data(data).unwrap(),
                Piece::Op(op) => script.append_opcode(*op).unwrap(),
            }
        }
        let short = script.to_short_form();
        prop_assert_eq!(Script::from_short_form(&short).unwrap(), script);
    }
}
