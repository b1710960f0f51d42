use crate::env::Size;
use crate::input::{ErrorKind, IStr};

use super::{distance, frequencies, similarity, Answer, Lists, Overflow, Record};

const EXAMPLE: &[u8] = b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

fn answer(data: &'static [u8]) -> Answer {
    let mut input = IStr::new(data, Size::ZERO);
    let mut lists = Lists::parse(&mut input).unwrap();
    lists.answer().unwrap()
}

#[test]
fn test_example() {
    let mut input = IStr::new(EXAMPLE, Size::ZERO);
    let mut lists = Lists::parse(&mut input).unwrap();

    assert_eq!(lists.left(), &[3, 4, 2, 1, 3, 3]);
    assert_eq!(lists.right(), &[4, 3, 5, 3, 9, 3]);

    let answer = lists.answer().unwrap();
    assert_eq!(answer.distance, 11);
    assert_eq!(answer.similarity, 31);

    assert_eq!(lists.left(), &[1, 2, 3, 3, 3, 4]);
    assert_eq!(lists.right(), &[3, 3, 3, 4, 5, 9]);
}

#[test]
fn test_order_independent() {
    let expected = Answer {
        distance: 11,
        similarity: 31,
    };

    assert_eq!(answer(EXAMPLE), expected);
    assert_eq!(answer(b"3   3\n3   9\n1   3\n2   5\n4   3\n3   4\n"), expected);
    assert_eq!(answer(b"1   3\n3   3\n4   3\n3   4\n2   5\n3   9"), expected);
}

#[test]
fn test_sort_idempotent() {
    let mut left = vec![5, -1, 3, 3, 0];
    let mut right = vec![2, 2, 8, -7, 1];

    let first = distance(&mut left, &mut right).unwrap();
    let (sorted_left, sorted_right) = (left.clone(), right.clone());
    let second = distance(&mut left, &mut right).unwrap();

    assert_eq!(first, second);
    assert_eq!(left, sorted_left);
    assert_eq!(right, sorted_right);
    assert_eq!(left, [-1, 0, 3, 3, 5]);
}

#[test]
fn test_distance_non_negative() {
    let mut left = vec![-10, 20, 0];
    let mut right = vec![15, -30, 7];
    // sorted: [-10, 0, 20] and [-30, 7, 15]
    assert_eq!(distance(&mut left, &mut right), Ok(20 + 7 + 5));

    let mut left = vec![1, 2, 3];
    let mut right = vec![1, 2, 3];
    assert_eq!(distance(&mut left, &mut right), Ok(0));
}

#[test]
fn test_distance_pairs_shortest() {
    let mut left = vec![4, 1];
    let mut right = vec![2];
    assert_eq!(distance(&mut left, &mut right), Ok(1));
}

#[test]
fn test_similarity_empty_right() {
    assert_eq!(similarity(&[1, 2, 3, 3], &[]), Ok(0));
    assert_eq!(similarity(&[], &[]), Ok(0));
}

#[test]
fn test_similarity_absent_values() {
    assert_eq!(similarity(&[7, 8], &[1, 2, 3]), Ok(0));
    assert_eq!(similarity(&[2, 7], &[2, 2, 3]), Ok(4));
}

#[test]
fn test_frequencies() {
    let counts = frequencies(&[4, 3, 5, 3, 9, 3]);
    assert_eq!(counts.len(), 4);
    assert_eq!(counts.get(&3), Some(&3));
    assert_eq!(counts.get(&4), Some(&1));
    assert_eq!(counts.get(&5), Some(&1));
    assert_eq!(counts.get(&9), Some(&1));
    assert_eq!(counts.get(&1), None);
}

#[test]
fn test_single_line() {
    let answer = answer(b"42   42\n");
    assert_eq!(answer.distance, 0);
    assert_eq!(answer.similarity, 42);
}

#[test]
fn test_empty_input() {
    let mut input = IStr::new(b"", Size::ZERO);
    let mut lists = Lists::parse(&mut input).unwrap();
    assert!(lists.is_empty());
    assert_eq!(lists.answer(), Ok(Answer::default()));
}

#[test]
fn test_crlf() {
    assert_eq!(
        answer(b"3   4\r\n4   3\r\n2   5\r\n1   3\r\n3   9\r\n3   3\r\n"),
        Answer {
            distance: 11,
            similarity: 31
        }
    );
}

#[test]
fn test_negative_values() {
    let answer = answer(b"-3   -3\n5   -3\n");
    // sorted: [-3, 5] and [-3, -3]
    assert_eq!(answer.distance, 8);
    assert_eq!(answer.similarity, -6);
}

#[test]
fn test_malformed_line() {
    let mut input = IStr::new(b"3   4\nabc   def\n1   2\n", Size::ZERO);
    let error = Lists::parse(&mut input).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(n) if *n == "abc"));
    assert_eq!(error.span(), Size::new(6)..Size::new(9));
}

#[test]
fn test_missing_separator() {
    let mut input = IStr::new(b"3   4\n3 4\n", Size::ZERO);
    let error = Lists::parse(&mut input).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MissingSeparator));
    assert_eq!(error.span(), Size::new(6)..Size::new(9));
}

#[test]
fn test_blank_line() {
    let mut input = IStr::new(b"3   4\n\n1   2\n", Size::ZERO);
    let error = Lists::parse(&mut input).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MissingSeparator));
}

#[test]
fn test_push() {
    let mut lists = Lists::new();
    lists.push(Record { left: 1, right: 2 });
    lists.push(Record { left: 3, right: 4 });
    assert_eq!(lists.len(), 2);
    assert_eq!(lists.left(), &[1, 3]);
    assert_eq!(lists.right(), &[2, 4]);
}

#[test]
fn test_distance_overflow() {
    let mut input = IStr::new(b"-9223372036854775808   9223372036854775807\n", Size::ZERO);
    let mut lists = Lists::parse(&mut input).unwrap();
    assert_eq!(lists.answer(), Err(Overflow::Distance));

    // Large differences that still fit are fine.
    let mut left = vec![i64::MIN];
    let mut right = vec![-1];
    assert_eq!(distance(&mut left, &mut right), Ok(i64::MAX));
}

#[test]
fn test_similarity_overflow() {
    let data = b"9223372036854775807   9223372036854775807\n9223372036854775807   9223372036854775807\n";
    let mut input = IStr::new(data, Size::ZERO);
    let mut lists = Lists::parse(&mut input).unwrap();
    assert_eq!(lists.answer(), Err(Overflow::Similarity));

    assert_eq!(similarity(&[i64::MIN], &[i64::MIN]), Ok(i64::MIN));
    assert_eq!(similarity(&[i64::MIN], &[i64::MIN, i64::MIN]), Err(Overflow::Similarity));
}
