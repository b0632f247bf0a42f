use hamming_channel::{ChannelBuilder, NoiseModel, Transmission};

const MODE: usize = 43;

const DEFAULT_MESSAGE: &str = "Branch and bound is a general algorithmic method for finding \
optimal solutions of discrete and combinatorial optimization problems. It refines exhaustive \
search by discarding subsets of feasible solutions that provably contain no optimum.";

fn print_report(title: &str, report: &Transmission) {
    println!("----------- {} -----------", title);
    println!("Encoded message ({} bits):\n{}", report.received.len(), report.received);
    println!("Bits flipped in transit: {}", report.flipped_bits);
    if report.decoded.is_text() {
        println!("Decoded message:\n{}", report.recovered);
    } else {
        let raw = report.decoded.bytes();
        println!(
            "Decoded bytes are not valid UTF-8 (first bytes: {})",
            hex::encode(&raw[..raw.len().min(32)])
        );
        println!("Best-effort text:\n{}", report.recovered);
    }
    println!(
        "Checksum: {:#010x}, matches: {}",
        report.received_checksum,
        report.checksum_ok()
    );
    println!(
        "Codewords corrected: {}, uncorrectable: {}",
        report.decoded.corrected(),
        report.uncorrectable()
    );
    println!("Word similarity: {:.4}", report.similarity);
}

fn main() -> hamming_channel::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        args.join(" ")
    };

    println!("Message:\n{}", message);
    println!(
        "Checksum: {:#010x}",
        hamming_channel::channel::crc32(message.as_bytes())
    );

    let runs = [
        ("NOISELESS", NoiseModel::Noiseless),
        ("ONE BIT PER CODEWORD", NoiseModel::OneBitPerCodeword),
        ("UP TO FOUR BITS PER CODEWORD", NoiseModel::UpToFourBitsPerCodeword),
    ];

    for (title, noise) in runs {
        let mut channel = ChannelBuilder::new().mode(MODE).noise(noise).build()?;
        let report = channel.transmit(&message)?;
        print_report(title, &report);
    }

    Ok(())
}
