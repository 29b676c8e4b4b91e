//! Integration tests for the caption → load/show → erase flow

use scenarist_core::{
    codec::odd_parity,
    codes::{preamble_code, ControlCode},
    encode_caption, tracker::planned_codes, write_footer, write_header, CaptionScreen, Channel,
    Color, FontStyle, Mode, Session,
};

fn caption(start_ms: i64, end_ms: i64) -> CaptionScreen {
    let mut screen = CaptionScreen::new(Channel::CC1, start_ms, end_ms);
    screen
        .put_text(14, 8, b"Caption text", FontStyle::Regular, Color::White)
        .unwrap();
    screen
}

/// Split a stream into (timecode, body) blocks
fn blocks(stream: &str) -> Vec<(String, String)> {
    stream
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .map(|(tc, body)| (tc.to_string(), body.to_string()))
        .collect()
}

fn timecode_key(tc: &str) -> Vec<u32> {
    tc.split(':').map(|part| part.parse().unwrap()).collect()
}

fn encode(session: &mut Session, screen: &CaptionScreen) -> String {
    let mut out = Vec::new();
    encode_caption(&mut out, session, screen).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_stream_with_header_and_footer() {
    let mut out = Vec::new();
    let mut session = Session::new(Mode::Binary);

    write_header(&mut out, &session).unwrap();
    encode_caption(&mut out, &mut session, &caption(1000, 3000)).unwrap();
    encode_caption(&mut out, &mut session, &caption(4000, 6000)).unwrap();
    write_footer(&mut out, &mut session).unwrap();

    let stream = String::from_utf8(out).unwrap();
    assert!(stream.starts_with("Scenarist_SCC V1.0\n\n"));

    let blocks = blocks(&stream);
    // load, show, erase, load, show, erase
    assert_eq!(blocks.len(), 6);
    assert_eq!(blocks[2], ("00:00:03:00".to_string(), "942c".to_string()));
    assert_eq!(blocks[5], ("00:00:06:00".to_string(), "942c".to_string()));

    // Every binary word is two odd-parity bytes
    for (_, body) in &blocks {
        for word in body.split(' ') {
            let bytes = hex::decode(word).unwrap();
            assert_eq!(bytes.len(), 2);
            for b in bytes {
                assert_eq!(b.count_ones() % 2, 1, "byte {:02x} in {}", b, word);
            }
        }
    }
}

#[test]
fn test_seamless_transition_skips_erase() {
    let mut session = Session::new(Mode::Binary);
    encode(&mut session, &caption(1000, 5000));
    let second = encode(&mut session, &caption(5000, 9000));

    let blocks = blocks(&second);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].1.starts_with("9420"));
    assert!(!second.contains("942c"));
}

#[test]
fn test_gap_erases_previous_caption_first() {
    let mut session = Session::new(Mode::Binary);
    encode(&mut session, &caption(1000, 5000));
    let second = encode(&mut session, &caption(7000, 9000));

    let blocks = blocks(&second);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], ("00:00:05:00".to_string(), "942c".to_string()));
    assert!(blocks[1].1.starts_with("9420"));
}

#[test]
fn test_erase_uses_previous_channel() {
    let mut session = Session::new(Mode::Binary);
    let mut first = caption(1000, 2000);
    first.channel = Channel::CC2;
    encode(&mut session, &first);

    let second = encode(&mut session, &caption(3000, 4000));
    let blocks = blocks(&second);
    assert_eq!(blocks[0].1, "1c2c");
    assert!(blocks[1].1.starts_with("9420"));
}

#[test]
fn test_identical_sessions_are_deterministic() {
    let screen = caption(2500, 4000);

    let mut a = Session::new(Mode::Binary);
    let mut b = Session::new(Mode::Binary);
    assert_eq!(encode(&mut a, &screen), encode(&mut b, &screen));
}

#[test]
fn test_independent_sessions_do_not_interfere() {
    let mut cc1 = Session::new(Mode::Binary);
    let mut cc3 = Session::new(Mode::Binary);

    encode(&mut cc1, &caption(1000, 2000));
    let mut other = caption(1500, 2500);
    other.channel = Channel::CC3;
    let first_on_cc3 = encode(&mut cc3, &other);

    // No erase leaks over from the other stream
    assert_eq!(blocks(&first_on_cc3).len(), 2);
    assert_eq!(cc1.last_end().map(|tc| tc.millis), Some(2000));
    assert_eq!(cc3.last_end().map(|tc| tc.millis), Some(2500));
}

#[test]
fn test_timecodes_never_decrease() {
    let mut session = Session::new(Mode::Binary);
    let mut out = Vec::new();

    // Overlapping and back-to-back captions force the clamp
    for (start, end) in [(1000, 4000), (1200, 1500), (1300, 5000), (5000, 5100), (5050, 8000)] {
        encode_caption(&mut out, &mut session, &caption(start, end)).unwrap();
    }
    write_footer(&mut out, &mut session).unwrap();

    let stream = String::from_utf8(out).unwrap();
    let keys: Vec<_> = blocks(&stream)
        .iter()
        .map(|(tc, _)| timecode_key(tc))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]), "{:?}", keys);
}

#[test]
fn test_hello_first_caption_codes() {
    let mut screen = CaptionScreen::new(Channel::CC1, 1000, 2000);
    screen
        .put_text(7, 10, b"HELLO", FontStyle::Regular, Color::White)
        .unwrap();

    let codes = planned_codes(&screen);
    assert_eq!(codes.iter().filter(|c| c.is_preamble()).count(), 1);
    assert_eq!(codes, vec![preamble_code(7, 10), ControlCode::TO2]);

    let mut session = Session::new(Mode::Mnemonic);
    let out = encode(&mut session, &screen);
    assert!(out.contains("\t{RCL}{0808}{TO2}HELLO_\n"));
}

#[test]
fn test_modes_select_the_same_codes() {
    let mut screen = CaptionScreen::new(Channel::CC1, 3000, 6000);
    screen
        .put_text(10, 1, b"Left", FontStyle::Underlined, Color::Cyan)
        .unwrap();
    screen
        .put_text(10, 6, b" and right", FontStyle::Regular, Color::Yellow)
        .unwrap();
    screen
        .put_text(12, 13, b"x", FontStyle::UnderlinedItalics, Color::Blue)
        .unwrap();

    let mut binary = Session::new(Mode::Binary);
    let mut mnemonic = Session::new(Mode::Mnemonic);
    let hex_blocks = blocks(&encode(&mut binary, &screen));
    let tag_blocks = blocks(&encode(&mut mnemonic, &screen));

    // Same timing in both notations
    let hex_times: Vec<_> = hex_blocks.iter().map(|(tc, _)| tc.clone()).collect();
    let tag_times: Vec<_> = tag_blocks.iter().map(|(tc, _)| tc.clone()).collect();
    assert_eq!(hex_times, tag_times);

    // Every tag in the load line appears, in order, as its hex word
    let load_hex = &hex_blocks[0].1;
    let mut search_from = 0;
    for tag in tag_blocks[0]
        .1
        .split('{')
        .skip(1)
        .map(|rest| &rest[..rest.find('}').unwrap()])
    {
        let code = ControlCode::all()
            .find(|c| c.mnemonic() == format!("{{{}}}", tag))
            .unwrap();
        let word = format!(
            "{:02x}{:02x}",
            odd_parity(code.first_byte(Channel::CC1)),
            odd_parity(code.second_byte())
        );
        let found = load_hex[search_from..].find(&word).unwrap();
        search_from += found + word.len();
    }
}
