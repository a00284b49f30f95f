use graal::prelude::*;
use rand::Rng;
use std::collections::HashSet;
use std::time::Instant;

#[test]
fn test_fuzz_sort_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let count = rng.random_range(0..200);
        let mut input: Vec<i32> = (0..count).map(|_| rng.random_range(-50..50)).collect();

        let mut expected = input.clone();
        expected.sort();

        sort(&mut input, |a, b| a < b);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_sort_strided_byte_order() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let count = rng.random_range(0..300);
        let values: Vec<u64> = (0..count).map(|_| rng.random_range(0..1_000)).collect();
        // Big-endian keys order the same bytewise and numerically.
        let mut raw: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();

        let mut view = StrideSliceMut::new(&mut raw, 8).unwrap();
        sort(&mut view, |a, b| a < b);

        let actual: Vec<u64> = raw
            .chunks_exact(8)
            .map(|c| u64::from_be_bytes(c.try_into().unwrap()))
            .collect();
        let mut expected = values;
        expected.sort();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_fuzz_sort_strided_decoded_order() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let count = rng.random_range(0..300);
        let values: Vec<i64> = (0..count).map(|_| rng.random_range(-500..500)).collect();
        let mut raw: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        let decode = |c: &[u8]| i64::from_ne_bytes(c.try_into().unwrap());

        let mut view = StrideSliceMut::new(&mut raw, 8).unwrap();
        sort(&mut view, |a, b| decode(a) < decode(b));

        let actual: Vec<i64> = raw.chunks_exact(8).map(decode).collect();
        let mut expected = values;
        expected.sort();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_fuzz_partition_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let count = rng.random_range(0..100);
        let mut input: Vec<i32> = (0..count).map(|_| rng.random_range(0..10)).collect();
        let mut original = input.clone();

        let point = partition(&mut input, |&x| x > 4);

        assert!(all_of(&input[..point], |&x| x > 4));
        assert!(none_of(&input[point..], |&x| x > 4));

        let mut permuted = input.clone();
        permuted.sort();
        original.sort();
        assert_eq!(permuted, original);
    }
}

#[test]
fn test_fuzz_unique_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let count = rng.random_range(0..60);
        let mut input: Vec<u8> = (0..count).map(|_| rng.random_range(0..12)).collect();

        let mut seen = HashSet::new();
        let expected: Vec<u8> = input.iter().copied().filter(|v| seen.insert(*v)).collect();

        let end = unique(&mut input, |a, b| a == b);
        assert_eq!(&input[..end], expected.as_slice());
    }
}

#[test]
fn test_fuzz_min_find_reverse_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let count = rng.random_range(0..50);
        let input: Vec<i32> = (0..count).map(|_| rng.random_range(-20..20)).collect();

        let expected_min = input
            .iter()
            .enumerate()
            .min_by_key(|&(index, value)| (*value, index))
            .map(|(index, _)| index);
        assert_eq!(min(&input, |a, b| a < b), expected_min);

        let expected_find = input.iter().position(|&x| x > 10).unwrap_or(input.len());
        assert_eq!(find_if(&input, |&x| x > 10), expected_find);

        let mut reversed = input.clone();
        reverse(&mut reversed);
        let expected: Vec<i32> = input.iter().rev().copied().collect();
        assert_eq!(reversed, expected);
        reverse(&mut reversed);
        assert_eq!(reversed, input);
    }
}

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    sort(&mut input, |a, b| a < b);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
