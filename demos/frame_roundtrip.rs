//! Frame a command, then decode it again

use timebox::{Command, Message, View};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Timebox frame round trip");
    println!("========================\n");

    // Show the clock in 24-hour format, in green
    let msg = Message::command(Command::SetView, &[View::Clock.as_u8(), 0x01, 0x00, 0xFF, 0x42]);
    println!("payload: {:02x?}", msg.payload().as_ref());

    let frame = msg.encode();
    println!("frame:   {frame:02x?} ({} bytes)", frame.len());

    let decoded = Message::decode(&frame)?;
    println!(
        "decoded: command={:?} len={:?} args={:02x?}",
        decoded.command_kind(),
        decoded.declared_len(),
        decoded.args()
    );

    assert_eq!(decoded, msg);
    Ok(())
}
