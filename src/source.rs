/// A single-pass producer of partitions that hands out borrowed views of its working buffer.
///
/// The view returned by `advance` borrows the generator, so it cannot be held across the next
/// call; the buffer behind it is overwritten in place on every advance. Each generator also
/// implements `Iterator`, which copies the view into an owned value per item.
///
/// A source is finite and cannot be restarted: once `advance` returns `None` it keeps returning
/// `None`. Construct a new instance to enumerate again.
pub trait PartitionSource {
    type View: ?Sized;

    fn advance(&mut self) -> Option<&Self::View>;

    /// the integer being partitioned
    fn target(&self) -> usize;

    /// Exhausts the source through the borrowed views and returns the number of partitions seen.
    fn drain_count(&mut self) -> usize {
        let mut count = 0usize;
        while self.advance().is_some() {
            count += 1;
        }
        count
    }
}
