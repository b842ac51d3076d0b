#![no_main]
use dynbits::BitVector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<bool>, usize, bool)| {
    let (model, raw_amount, shift_left) = data;
    if model.is_empty() {
        return;
    }

    let size = model.len();
    let mut vector = BitVector::new(size).unwrap();
    for (position, &set) in model.iter().enumerate() {
        if set {
            vector.set(position).unwrap();
        }
    }

    // Masked queries against the model.
    let expected_ones = model.iter().filter(|&&set| set).count();
    assert_eq!(vector.count(), expected_ones);
    assert_eq!(vector.any(), expected_ones > 0);
    assert_eq!(vector.all(), expected_ones == size);

    // Complement twice is the identity, even with padding in play.
    let mut flipped = vector.clone();
    flipped.flip_all();
    assert_eq!(flipped.count(), size - expected_ones);
    flipped.flip_all();
    assert_eq!(flipped, vector);

    // Text round-trip.
    let parsed: BitVector = vector.to_string().parse().unwrap();
    assert_eq!(parsed, vector);

    // One shift against the naive model.
    let amount = raw_amount % (2 * size);
    let mut shifted = vector.clone();
    if shift_left {
        shifted.shift_left(amount);
    } else {
        shifted.shift_right(amount);
    }
    for position in 0..size {
        let expected = if shift_left {
            position >= amount && model[position - amount]
        } else {
            position + amount < size && model[position + amount]
        };
        assert_eq!(shifted.test(position).unwrap(), expected);
    }
});
