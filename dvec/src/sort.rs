//! In-place unstable sort over fixed-stride byte slots.
use std::cmp::Ordering;

/// Sort the slots of `buf` with heapsort.
///
/// `buf` is treated as `buf.len() / stride` slots of `stride` bytes.
/// The sort is not stable and runs in O(n log n) with no extra memory.
pub fn sort_strided<F>(buf: &mut [u8], stride: usize, mut cmp: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    debug_assert!(stride > 0);
    debug_assert_eq!(0, buf.len() % stride);
    let n = buf.len() / stride;
    if n < 2 {
        return;
    }
    // build max-heap
    for root in (0..n / 2).rev() {
        sift_down(buf, stride, root, n, &mut cmp);
    }
    for end in (1..n).rev() {
        swap_slots(buf, stride, 0, end);
        sift_down(buf, stride, 0, end, &mut cmp);
    }
}

#[inline]
fn slot(buf: &[u8], stride: usize, idx: usize) -> &[u8] {
    &buf[idx * stride..(idx + 1) * stride]
}

fn sift_down<F>(buf: &mut [u8], stride: usize, mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end
            && cmp(slot(buf, stride, child), slot(buf, stride, child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if cmp(slot(buf, stride, root), slot(buf, stride, child)) != Ordering::Less {
            return;
        }
        swap_slots(buf, stride, root, child);
        root = child;
    }
}

#[inline]
fn swap_slots(buf: &mut [u8], stride: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = buf.split_at_mut(hi * stride);
    head[lo * stride..(lo + 1) * stride].swap_with_slice(&mut tail[..stride]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn cmp_u32(a: &[u8], b: &[u8]) -> Ordering {
        let a = u32::from_ne_bytes(a.try_into().unwrap());
        let b = u32::from_ne_bytes(b.try_into().unwrap());
        a.cmp(&b)
    }

    fn to_bytes(vs: &[u32]) -> Vec<u8> {
        vs.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn test_sort_strided_small() {
        let mut buf = to_bytes(&[3, 1, 2]);
        sort_strided(&mut buf, 4, cmp_u32);
        assert_eq!(to_bytes(&[1, 2, 3]), buf);

        let mut empty: Vec<u8> = vec![];
        sort_strided(&mut empty, 4, cmp_u32);
        assert!(empty.is_empty());

        let mut single = to_bytes(&[42]);
        sort_strided(&mut single, 4, cmp_u32);
        assert_eq!(to_bytes(&[42]), single);
    }

    #[test]
    fn test_sort_strided_random() {
        let mut rng = rand::thread_rng();
        for n in [2usize, 7, 64, 1000] {
            let mut vs: Vec<u32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
            let mut buf = to_bytes(&vs);
            sort_strided(&mut buf, 4, cmp_u32);
            vs.sort();
            assert_eq!(to_bytes(&vs), buf);
        }
    }

    #[test]
    fn test_sort_strided_wide_slots() {
        // 3-byte slots ordered by first byte, remaining bytes travel along.
        let mut buf = vec![9, 90, 91, 1, 10, 11, 5, 50, 51];
        sort_strided(&mut buf, 3, |a, b| a[0].cmp(&b[0]));
        assert_eq!(vec![1, 10, 11, 5, 50, 51, 9, 90, 91], buf);
    }

    #[test]
    fn test_sort_strided_descending() {
        let mut buf = to_bytes(&[1, 5, 3, 4, 2]);
        sort_strided(&mut buf, 4, |a, b| cmp_u32(b, a));
        assert_eq!(to_bytes(&[5, 4, 3, 2, 1]), buf);
    }
}
