use ltsv_core::{fields, unescape};

fn main() {
    let line = b"time:2024-01-30T15:23:46.123Z\tstatus:200\tua:name with a \\ttab and a \\nnewline";

    println!("Input: {:?}\n", String::from_utf8_lossy(line));
    println!("Fields:");

    for (label, raw_value) in fields(line) {
        match unescape(raw_value) {
            Ok(value) => println!(
                "  {} = {:?}",
                String::from_utf8_lossy(label),
                String::from_utf8_lossy(&value)
            ),
            Err(err) => println!("  {} = <{}>", String::from_utf8_lossy(label), err),
        }
    }
}
