use dvec::{Error, RawVec, TypedVec};
use rand::Rng;

fn read_i32(bs: &[u8]) -> i32 {
    i32::from_ne_bytes(bs.try_into().unwrap())
}

#[test]
fn test_init_any_capacity() {
    for stride in [1usize, 3, 4, 8, 24] {
        for cap in [0usize, 1, 2, 17] {
            let vec = RawVec::new(stride, cap).unwrap();
            assert_eq!(0, vec.len());
            assert_eq!(cap, vec.capacity());
            assert_eq!(stride, vec.stride());
        }
    }
    assert_eq!(Error::InvalidArgument, RawVec::new(0, 0).unwrap_err());
    assert_eq!(Error::InvalidArgument, RawVec::new(0, 8).unwrap_err());
}

#[test]
fn test_doubling_scenario() {
    let mut vec = RawVec::new(4, 2).unwrap();
    let mut caps = vec![];
    for v in 0..5i32 {
        vec.push(&v.to_ne_bytes()).unwrap();
        caps.push(vec.capacity());
    }
    assert_eq!(vec![2, 2, 4, 4, 8], caps);
    assert_eq!(5, vec.len());
    assert_eq!(Some(4), vec.get(4).map(read_i32));
    assert_eq!(None, vec.get(5));
}

#[test]
fn test_underflow_scenario() {
    let mut vec = RawVec::new(4, 1).unwrap();
    assert_eq!(Err(Error::Underflow), vec.remove_last());
    vec.push(&1i32.to_ne_bytes()).unwrap();
    assert_eq!(Ok(()), vec.remove_last());
    assert_eq!(0, vec.len());
    assert_eq!(Err(Error::Underflow), vec.remove_last());
    assert_eq!(1, vec.capacity());
}

#[test]
fn test_elements_survive_growth() {
    let mut rng = rand::thread_rng();
    let values: Vec<[u8; 12]> = (0..300).map(|_| rng.gen()).collect();
    let mut vec = RawVec::new(12, 3).unwrap();
    for (i, v) in values.iter().enumerate() {
        vec.push(v).unwrap();
        assert_eq!(i + 1, vec.len());
        // every earlier element is still intact
        if vec.len() == vec.capacity() {
            for (j, w) in values[..=i].iter().enumerate() {
                assert_eq!(Some(&w[..]), vec.get(j));
            }
        }
    }
    assert_eq!(384, vec.capacity());
}

#[test]
fn test_remove_last_keeps_prefix() {
    let mut vec = TypedVec::from_slice(&[10u32, 20, 30, 40]).unwrap();
    vec.remove_last().unwrap();
    assert_eq!(&[10, 20, 30], vec.as_slice());
    assert_eq!(4, vec.capacity());
    // the removed slot is overwritten by next append only
    assert_eq!(&40u32.to_ne_bytes(), vec.as_raw().spare_bytes());
    vec.push(50).unwrap();
    assert_eq!(&[10, 20, 30, 50], vec.as_slice());
}

#[test]
fn test_get_bounds() {
    let mut vec = TypedVec::<i32>::with_capacity(8).unwrap();
    for i in 0..5 {
        vec.push(i).unwrap();
    }
    for i in 0..5 {
        assert_eq!(Some(&(i as i32)), vec.get(i));
    }
    for i in 5..10 {
        assert!(vec.get(i).is_none());
    }
}

#[test]
fn test_sort_ascending() {
    let mut rng = rand::thread_rng();
    let mut vec = TypedVec::<i32>::with_capacity(0).unwrap();
    for _ in 0..257 {
        vec.push(rng.gen()).unwrap();
    }
    vec.sort_by(|a, b| a.cmp(b));
    let sorted: Vec<i32> = (0..vec.len()).map(|i| *vec.get(i).unwrap()).collect();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    // sorting again is no-op
    vec.sort_by(|a, b| a.cmp(b));
    assert_eq!(&sorted[..], vec.as_slice());

    let mut empty = TypedVec::<i32>::with_capacity(0).unwrap();
    empty.sort();
    assert!(empty.is_empty());
}

#[test]
fn test_teardown_then_exit() {
    let mut vec = RawVec::new(16, 4).unwrap();
    for i in 0..10u128 {
        vec.push(&i.to_ne_bytes()).unwrap();
    }
    vec.teardown();
}

#[test]
fn test_overflow() {
    assert_eq!(Error::Overflow, RawVec::new(8, usize::MAX / 4).unwrap_err());
    assert_eq!(
        Error::Overflow,
        TypedVec::<u64>::with_capacity(usize::MAX).unwrap_err()
    );
}

#[test]
fn test_error_message() {
    assert_eq!("invalid arguments passed", dvec::error_message(Error::InvalidArgument));
    assert_eq!("reallocation failed", Error::ReallocationFailure.to_string());
}
