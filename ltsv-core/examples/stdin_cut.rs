use std::io::Read;

use ltsv_core::Cutter;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    let mut cutter = Cutter::default();
    for line in input.split(|&b| b == b'\n').filter(|line| !line.is_empty()) {
        cutter.set_line(line);
        while let Some(label) = cutter.next_label() {
            match cutter.next_unescaped_value() {
                Ok(value) => println!(
                    "label={}, value={}",
                    String::from_utf8_lossy(label),
                    String::from_utf8_lossy(&value)
                ),
                Err(err) => {
                    eprintln!("skipping field {}: {}", String::from_utf8_lossy(label), err)
                }
            }
        }
        println!("---");
    }
}
