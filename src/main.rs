use std::env;
use std::io::{self, BufRead, Write};

use huffman_coding::stats::Ordinal;
use huffman_coding::{CompressionStats, Symbol, decode, encode};
use log::{debug, error, info};

struct Options {
    bytes: bool,
    text: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        bytes: false,
        text: None,
    };

    for arg in args {
        if arg == "--bytes" {
            options.bytes = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option {}", arg));
        } else if options.text.is_none() {
            options.text = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument {}", arg));
        }
    }
    Ok(options)
}

fn read_line() -> io::Result<String> {
    print!("\nEnter string to compress: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run<S, F>(text: &str, symbols: &[S], render: F) -> huffman_coding::Result<()>
where
    S: Symbol + Ordinal,
    F: Fn(&[S]) -> String,
{
    let output = encode(symbols)?;
    let decoded = decode(&output.encoded, &output.table)?;
    if decoded != symbols {
        error!("Decoded symbols differ from the input!");
    }
    let stats = CompressionStats::compute(symbols, &output)?;

    let table: Vec<String> = output
        .table
        .iter()
        .map(|(symbol, code)| format!("{:?}: {}", symbol, code))
        .collect();

    println!();
    println!("-> Input string:                     {}", text);
    println!("-> Decompressed output:              {}", render(&decoded));
    println!(
        "-> Symbols:                          {} ({} distinct)",
        stats.symbols, stats.distinct_symbols
    );
    println!("-> Huffman encoding table:           {{{}}}", table.join(", "));
    println!("-> Original amount of bits:          {}", stats.baseline_bits);
    println!("-> Amount of bits after compression: {}", stats.encoded_bits);
    println!("-> Packed size:                      {} bytes", stats.packed_bytes);
    println!("-> Entropy:                          {:.4} bits/symbol", stats.entropy);
    println!(
        "-> Average code length:              {:.4} bits/symbol",
        stats.average_code_length
    );
    println!("-> Compression rate:                 {:.2}%", stats.compression_rate());
    println!();

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: huffman-demo [--bytes] [TEXT]");
            eprintln!("  --bytes: code the UTF-8 bytes instead of characters.");
            eprintln!("  TEXT:    text to compress; read from stdin when missing.");
            std::process::exit(1);
        }
    };

    let text = match options.text {
        Some(text) => text,
        None => match read_line() {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        },
    };

    info!("--- Start ---");
    debug!(
        "Coding {} bytes of input as {}",
        text.len(),
        if options.bytes { "bytes" } else { "chars" }
    );

    let result = if options.bytes {
        run(&text, text.as_bytes(), |bytes| {
            String::from_utf8_lossy(bytes).into_owned()
        })
    } else {
        let chars: Vec<char> = text.chars().collect();
        run(&text, &chars, |chars| chars.iter().collect())
    };

    if let Err(e) = result {
        error!("Huffman coding failed: {}", e);
        std::process::exit(1);
    }

    info!("--- End ---");
}
