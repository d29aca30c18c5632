// -*- coding: utf-8; mode: rust; -*-
//
// To the extent possible under law, the authors have waived all
// copyright and related or neighboring rights to utmatrix,
// using the Creative Commons "CC0" public domain dedication.  See
// <http://creativecommons.org/publicdomain/zero/1.0/> for full
// details.

use rand::Rng;

use utmatrix::{Error, Vector, MAX_VECTOR_SIZE};

fn counting(size: usize) -> Vector<i32> {
    let mut v = Vector::new(size).unwrap();
    for i in 0..size {
        v[i] = i as i32;
    }
    v
}

#[test]
fn can_create_vector_with_positive_length() {
    let v = Vector::<i32>::new(5).unwrap();
    assert_eq!(v.size(), 5);
    assert!(v.iter().all(|&x| x == 0));
}

#[test]
fn any_valid_size_is_reported_back() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let size = rng.gen_range(1, 4096);
        let start = rng.gen_range(0, 4096);
        let v = Vector::<u8>::with_start_index(size, start).unwrap();
        assert_eq!(v.size(), size);
        assert_eq!(v.start_index(), start);
        assert_eq!(v.window(), start..start + size);
    }
}

#[test]
fn can_create_vector_with_max_size() {
    let v = Vector::<u8>::new(MAX_VECTOR_SIZE).unwrap();
    assert_eq!(v.size(), MAX_VECTOR_SIZE);
    assert_eq!(v.end_index(), MAX_VECTOR_SIZE);
}

#[test]
fn cant_create_too_large_vector() {
    assert_eq!(
        Vector::<i32>::new(MAX_VECTOR_SIZE + 1),
        Err(Error::InvalidArgument {
            what: "vector size",
            value: MAX_VECTOR_SIZE + 1,
            min: 1,
            max: MAX_VECTOR_SIZE,
        })
    );
}

#[test]
fn cant_create_empty_vector() {
    match Vector::<i32>::new(0) {
        Err(Error::InvalidArgument { value: 0, .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn cant_create_vector_whose_window_overflows() {
    match Vector::<i32>::with_start_index(5, usize::MAX - 2) {
        Err(Error::InvalidArgument { what: "start index", .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn from_vec_validates_its_buffer() {
    let v = Vector::from_vec(vec![1, 2, 3], 4).unwrap();
    assert_eq!(v.window(), 4..7);
    assert_eq!(v[6], 3);
    assert!(Vector::<i32>::from_vec(Vec::new(), 0).is_err());
}

#[test]
fn copied_vector_is_equal_to_source_one() {
    let v1 = counting(3);
    let v2 = v1.clone();
    assert_eq!(v2, v1);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let v1 = counting(3);
    let mut v2 = v1.clone();
    v2[0] = 15;
    assert_ne!(v2, v1);
    assert_eq!(v1[0], 0);
}

#[test]
fn can_get_start_index() {
    let v = Vector::<i32>::with_start_index(4, 2).unwrap();
    assert_eq!(v.start_index(), 2);
    assert_eq!(v.end_index(), 6);
}

#[test]
fn can_set_and_get_element() {
    let mut v = Vector::<i32>::new(4).unwrap();
    v[0] = 4;
    assert_eq!(v[0], 4);
    *v.get_mut(3).unwrap() = 7;
    assert_eq!(v.get(3), Ok(&7));
}

#[test]
fn elements_are_addressed_from_start_index() {
    let mut v = Vector::<i32>::with_start_index(3, 2).unwrap();
    v[2] = 1;
    v[4] = 9;
    assert_eq!(v.as_slice(), &[1, 0, 9]);
}

#[test]
fn get_fails_below_start_index() {
    let v = Vector::<i32>::with_start_index(5, 2).unwrap();
    assert_eq!(
        v.get(1),
        Err(Error::OutOfRange {
            index: 1,
            start: 2,
            end: 7
        })
    );
}

#[test]
fn get_fails_past_the_end() {
    let mut v = Vector::<i32>::with_start_index(5, 2).unwrap();
    assert_eq!(
        v.get_mut(7),
        Err(Error::OutOfRange {
            index: 7,
            start: 2,
            end: 7
        })
    );
}

#[test]
#[should_panic(expected = "index 7 out of range 2..7")]
fn indexing_past_the_end_panics() {
    let v = Vector::<i32>::with_start_index(5, 2).unwrap();
    let _element = v[7];
}

#[test]
fn can_assign_vector_to_its_own_copy() {
    let mut v1 = counting(3);
    v1 = v1.clone();
    assert_eq!(v1, counting(3));
}

#[test]
fn can_assign_vectors_of_equal_size() {
    let v1 = counting(3);
    let mut v2 = Vector::new(3).unwrap();
    v2.assign(&v1);
    assert_eq!(v2, v1);
}

#[test]
fn assign_changes_vector_size_and_start_index() {
    let v1 = Vector::<i32>::with_start_index(3, 1).unwrap();
    let mut v2 = Vector::new(2).unwrap();
    v2.assign(&v1);
    assert_eq!(v2.size(), v1.size());
    assert_eq!(v2.start_index(), 1);
}

#[test]
fn can_assign_vectors_of_different_size() {
    let v1 = counting(3);
    let mut v2 = Vector::new(2).unwrap();
    v2[0] = 2;
    v2[1] = 3;
    v2.assign(&v1);
    assert_eq!(v1, v2);
}

#[test]
fn assigned_vector_has_its_own_memory() {
    let v1 = counting(3);
    let mut v2 = Vector::new(5).unwrap();
    v2.assign(&v1);
    v2[2] = 100;
    assert_eq!(v1[2], 2);
}

#[test]
fn compare_vector_with_itself_return_true() {
    let v = counting(3);
    assert_eq!(v, v);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let v1 = counting(3);
    let mut v2 = Vector::new(2).unwrap();
    v2[0] = 3;
    v2[1] = 5;
    assert_ne!(v1, v2);
}

#[test]
fn vectors_with_different_start_index_are_not_equal() {
    let v1 = Vector::<i32>::with_start_index(3, 0).unwrap();
    let v2 = Vector::<i32>::with_start_index(3, 1).unwrap();
    assert_ne!(v1, v2);
}

#[test]
fn can_add_scalar_to_vector() {
    let v = counting(3);
    assert_eq!((&v + 5).as_slice(), &[5, 6, 7]);
}

#[test]
fn can_subtract_scalar_from_vector() {
    let v = counting(3);
    assert_eq!((&v - 5).as_slice(), &[-5, -4, -3]);
}

#[test]
fn can_multiply_scalar_by_vector() {
    let v = counting(3);
    assert_eq!((v * 5).as_slice(), &[0, 5, 10]);
}

#[test]
fn scalar_operations_keep_start_index() {
    let v = Vector::<f64>::from_vec(vec![1.5, 2.5], 3).unwrap();
    let w = &v * 2.0;
    assert_eq!(w.window(), 3..5);
    assert_eq!(w[4], 5.0);
}

#[test]
fn can_add_vectors_with_equal_size() {
    let v1 = counting(3);
    let v2 = &v1 + 5;
    assert_eq!((&v1 + &v2).unwrap().as_slice(), &[5, 7, 9]);
}

#[test]
fn cant_add_vectors_with_not_equal_size() {
    let v1 = Vector::<i32>::new(3).unwrap();
    let v2 = Vector::<i32>::new(2).unwrap();
    assert_eq!(
        &v1 + &v2,
        Err(Error::SizeMismatch {
            left: 0..3,
            right: 0..2
        })
    );
}

#[test]
fn can_subtract_vectors_with_equal_size() {
    let v = counting(3);
    let v2 = Vector::from_vec(vec![2, 3, 5], 0).unwrap();
    assert_eq!((&v2 - &v).unwrap().as_slice(), &[2, 2, 3]);
}

#[test]
fn cant_subtract_vectors_with_not_equal_size() {
    let v1 = Vector::<i32>::new(2).unwrap();
    let v2 = Vector::<i32>::new(3).unwrap();
    assert!(matches!(&v1 - &v2, Err(Error::SizeMismatch { .. })));
}

#[test]
fn cant_combine_vectors_with_shifted_windows() {
    let v1 = Vector::<i32>::with_start_index(3, 0).unwrap();
    let v2 = Vector::<i32>::with_start_index(3, 1).unwrap();
    assert!(matches!(v1.try_add(&v2), Err(Error::SizeMismatch { .. })));
}

#[test]
fn can_multiply_vectors_with_equal_size() {
    let v1 = Vector::<i32>::from_vec(vec![5; 3], 0).unwrap();
    let v2 = Vector::<i32>::from_vec(vec![6; 3], 0).unwrap();
    assert_eq!(&v1 * &v2, Ok(90));
}

#[test]
fn cant_multiply_vectors_with_not_equal_size() {
    let v1 = Vector::<i32>::new(2).unwrap();
    let v2 = Vector::<i32>::new(3).unwrap();
    assert!(matches!(v1.dot(&v2), Err(Error::SizeMismatch { .. })));
}

#[test]
fn failed_operation_leaves_operands_untouched() {
    let v1 = counting(3);
    let v2 = counting(2);
    assert!((&v1 + &v2).is_err());
    assert_eq!(v1, counting(3));
    assert_eq!(v2, counting(2));
}

#[test]
fn vector_displays_its_elements() {
    assert_eq!(counting(4).to_string(), "0 1 2 3");
}
