// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_toolkit::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeric Toolkit Example ===\n");

    // Fixed-point arithmetic
    println!("Fixed point:");
    let price: Fixed = "19.99".parse().unwrap();
    let qty = Fixed::from_integer(3).unwrap();
    let total = price.checked_mul(qty).unwrap();
    println!("  {} x {} = {}", price, qty, total);
    println!("  {} / 7 = {}", total, total.checked_div(Fixed::from_integer(7).unwrap()).unwrap());
    println!(
        "  rounded to 1 digit (to even): {}",
        total.round(1, MidpointRounding::ToEven).unwrap()
    );

    let european: Fixed = Fixed::parse_with("1.234,5", &NumberFormat::european()).unwrap();
    println!("  parsed '1.234,5' (european): {}", european);

    // Conversion policies
    println!("\nConversion of 300i32 into u8:");
    for mode in [
        ConversionMode::Default,
        ConversionMode::Clamp,
        ConversionMode::Cast,
        ConversionMode::CastClamp,
    ] {
        match convert::<i32, u8>(300, mode) {
            Ok(v) => println!("  {:?}: {}", mode, v),
            Err(e) => println!("  {:?}: error ({})", mode, e),
        }
    }
    println!(
        "  NaN into i64 (saturating generic): {}",
        convert_saturating_generic::<f64, i64>(f64::NAN)
    );

    // Random sampling
    println!("\nRandom sampling:");
    let mut rng = StdRng::seed_from_u64(2024);
    let ints: Vec<i32> = (0..5)
        .map(|_| {
            i32::provider()
                .next_in_range(&mut rng, i32::MIN, i32::MAX, GenerationMode::Default)
                .unwrap()
        })
        .collect();
    println!("  full i32 domain: {:?}", ints);

    let floats: Vec<f64> = (0..5)
        .map(|_| {
            f64::provider()
                .next_in_range(&mut rng, -1.0, 1.0, GenerationMode::Extended)
                .unwrap()
        })
        .collect();
    println!("  bit-uniform f64 in [-1, 1]: {:?}", floats);

    let decimal = Decimal::provider()
        .next_in_range(&mut rng, Decimal::ZERO, Decimal::from(100), GenerationMode::Default)
        .unwrap();
    println!("  decimal in [0, 100]: {}", decimal);

    // Generic algorithms
    println!("\nGeneric algorithms:");
    let prices: Vec<Fixed> = ["1.25", "2.50", "0.75"].iter().map(|s| s.parse().unwrap()).collect();
    println!("  sum = {}", sum(&prices).unwrap());
    println!("  mean = {}", mean(&prices).unwrap());
    if let Some((lo, hi)) = min_max(&prices) {
        println!("  min = {}, max = {}", lo, hi);
    }

    // Bytes
    let provider = Decimal::provider();
    let bytes = provider.to_bytes(Decimal::new(-12345, 2));
    println!("\nDecimal -123.45 as bytes: {:02x?}", bytes.as_slice());
    println!("  decoded: {}", provider.from_bytes(&bytes).unwrap());

    println!("\n=== Example Complete ===");
}
