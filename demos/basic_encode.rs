//! Basic encoding example

use scenarist_core::{
    encode_caption, write_footer, write_header, CaptionScreen, Channel, Color, FontStyle, Mode,
    Session,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scenarist Basic Encoding Example\n");

    let lines: [(&[u8], Color); 3] = [
        (b"Previously on the show...", Color::White),
        (b"Where were you last night?", Color::Yellow),
        (b"[door slams]", Color::Cyan),
    ];

    let mut session = Session::new(Mode::Binary);
    let mut output = Vec::new();
    write_header(&mut output, &session)?;

    for (i, (text, color)) in lines.iter().enumerate() {
        let start_ms = 1000 + i as i64 * 2500;
        let mut screen = CaptionScreen::new(Channel::CC1, start_ms, start_ms + 2000);
        screen.put_text(14, 2, text, FontStyle::Regular, *color)?;

        let before = output.len();
        encode_caption(&mut output, &mut session, &screen)?;
        println!("Caption {}: {} bytes", i + 1, output.len() - before);
    }

    write_footer(&mut output, &mut session)?;

    std::fs::write("example_output.scc", &output)?;

    println!("\nWrote {} bytes to example_output.scc", output.len());
    println!("Use 'scenarist catalog' to look up the control codes it contains");

    Ok(())
}
