/// Array-move permutation primitive
///
/// Removes the element at `from` and reinserts it at `to`, shifting the
/// elements in between by one position. This is the single-step shift used
/// for every reorder on the board, at both item level and container level.
///
/// Out-of-bounds indices and `from == to` leave the sequence unchanged.
///
/// # Examples
/// ```
/// use boardkit_core::domain::reorder::array_move;
///
/// let mut items = vec![1, 2, 3, 4, 5];
/// array_move(&mut items, 2, 0);
/// assert_eq!(items, vec![3, 1, 2, 4, 5]);
/// ```
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_backward() {
        let mut items = vec![1, 2, 3, 4, 5];
        array_move(&mut items, 2, 0);
        assert_eq!(items, vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn test_move_forward() {
        let mut items = vec![1, 2, 3, 4, 5];
        array_move(&mut items, 0, 3);
        assert_eq!(items, vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn test_move_to_last() {
        let mut items = vec!['x', 'y', 'z'];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!['y', 'z', 'x']);
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut items = vec![1, 2, 3];
        array_move(&mut items, 1, 1);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut items = vec![1, 2, 3];
        array_move(&mut items, 5, 0);
        assert_eq!(items, vec![1, 2, 3]);
        array_move(&mut items, 0, 5);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_shift_not_swap() {
        // Moving 4 onto position 0 shifts the rest right by one rather than
        // exchanging the two elements.
        let mut items = vec![1, 2, 3, 4];
        array_move(&mut items, 3, 0);
        assert_eq!(items, vec![4, 1, 2, 3]);
    }
}
