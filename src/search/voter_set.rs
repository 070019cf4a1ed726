use crate::partition::District;

/// A district under construction: members in insertion order plus a membership mask.
/// Members leave only in reverse order of arrival.
#[derive(Clone, Debug)]
pub(crate) struct Group {
    members: Vec<usize>,
    mask: Vec<bool>,
}

impl Group {
    /// An empty group over a universe of `num_voters`.
    pub(crate) fn new(num_voters: usize) -> Self {
        Self { members: Vec::new(), mask: vec![false; num_voters] }
    }

    /// Start a group containing only `seed`, over a universe of `num_voters`.
    pub(crate) fn seeded(seed: usize, num_voters: usize) -> Self {
        let mut group = Self::new(num_voters);
        group.reset(seed);
        group
    }

    /// Empty the group and restart it from `seed`, reusing its buffers.
    pub(crate) fn reset(&mut self, seed: usize) {
        for voter in self.members.drain(..) { self.mask[voter] = false }
        self.mask[seed] = true;
        self.members.push(seed);
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.members.len() }

    #[inline] pub(crate) fn members(&self) -> &[usize] { &self.members }

    #[inline] pub(crate) fn contains(&self, voter: usize) -> bool { self.mask[voter] }

    /// Tentatively add `voter` to the group.
    #[inline]
    pub(crate) fn push(&mut self, voter: usize) {
        debug_assert!(!self.mask[voter], "voter {voter} already in group");
        self.mask[voter] = true;
        self.members.push(voter);
    }

    /// Undo the most recent `push`, which must have added `voter`.
    #[inline]
    pub(crate) fn pop(&mut self, voter: usize) {
        let last = self.members.pop();
        debug_assert_eq!(last, Some(voter), "group undo out of order");
        self.mask[voter] = false;
    }

    pub(crate) fn to_district(&self) -> District { District::new(self.members.clone()) }
}

/// Voters committed to accepted districts on the current search path.
#[derive(Clone, Debug)]
pub(crate) struct UsedSet {
    mask: Vec<bool>,
    count: usize,
}

impl UsedSet {
    pub(crate) fn new(num_voters: usize) -> Self {
        Self { mask: vec![false; num_voters], count: 0 }
    }

    #[inline] pub(crate) fn contains(&self, voter: usize) -> bool { self.mask[voter] }

    /// Number of committed voters.
    #[inline] pub(crate) fn len(&self) -> usize { self.count }

    #[inline] pub(crate) fn mask(&self) -> &[bool] { &self.mask }

    /// Mark every voter of `district` as used.
    pub(crate) fn commit(&mut self, district: &District) {
        for voter in district.iter() {
            debug_assert!(!self.mask[voter], "voter {voter} committed twice");
            self.mask[voter] = true;
        }
        self.count += district.len();
    }

    /// Exactly reverse a previous `commit` of `district`.
    pub(crate) fn release(&mut self, district: &District) {
        for voter in district.iter() {
            debug_assert!(self.mask[voter], "voter {voter} released without commit");
            self.mask[voter] = false;
        }
        self.count -= district.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_push_pop_is_symmetric() {
        let mut group = Group::seeded(2, 5);
        group.push(3);
        group.push(0);
        assert_eq!(group.members(), &[2, 3, 0]);
        assert!(group.contains(0));

        group.pop(0);
        assert_eq!(group.members(), &[2, 3]);
        assert!(!group.contains(0));
        assert_eq!(group.to_district().voters(), &[2, 3]);
    }

    #[test]
    fn reset_clears_previous_members() {
        let mut group = Group::seeded(0, 4);
        group.push(1);
        group.push(2);

        group.reset(3);
        assert_eq!(group.members(), &[3]);
        assert!((0..3).all(|voter| !group.contains(voter)));
        assert!(group.contains(3));
    }

    #[test]
    fn used_set_commit_release_restores_state() {
        let mut used = UsedSet::new(6);
        let a = District::new(vec![0, 1, 2]);
        let b = District::new(vec![4, 5]);

        used.commit(&a);
        used.commit(&b);
        assert_eq!(used.len(), 5);
        assert!(used.contains(4));

        used.release(&b);
        assert_eq!(used.len(), 3);
        assert_eq!(used.mask(), &[true, true, true, false, false, false]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "group undo out of order")]
    fn group_rejects_out_of_order_undo() {
        let mut group = Group::seeded(0, 3);
        group.push(1);
        group.push(2);
        group.pop(1);
    }
}
