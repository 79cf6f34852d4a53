pub trait IteratorExt : Iterator {
    fn fold_mutating<B, F: FnMut(&mut B, Self::Item)>(self, init: B, mut f: F) -> B
        where
            Self: Sized,
    {
        self.fold(init, move |mut b, item| {
            f(&mut b, item);
            b
        })
    }
}

impl<It> IteratorExt for It where It: Iterator {}

#[test]
fn test_fold_mutating() {
    assert_eq!([1, 2, 3].iter().fold_mutating(0, |n_accumulated, n| *n_accumulated += n), 6);
}
