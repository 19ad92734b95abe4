use colored::Colorize;
use time::{Duration, PreciseTime};

fn to_sec(duration: Duration) -> f64 {
    duration.num_microseconds()
            .map_or(duration.num_milliseconds() as f64 * 1e-3, |us| us as f64 * 1e-6)
}

fn bold_print(msg: &str) {
    println!("{}", msg.bold());
}

pub struct Timer {
    start_time: PreciseTime,
    last_print_time: PreciseTime,
}

impl Timer {
    pub fn new() -> Timer {
        let now = PreciseTime::now();
        Timer { start_time: now, last_print_time: now }
    }

    pub fn print(&mut self) {
        let now = PreciseTime::now();
        bold_print(&format!("Timer since last print: {:.3} sec; since creation: {:.3} sec",
                            to_sec(self.last_print_time.to(now)),
                            to_sec(self.start_time.to(now))));
        self.last_print_time = now;
    }

    /// Prints how many partitions were produced since the last print and the rate per second.
    pub fn print_throughput(&mut self, label: &str, num_partitions: usize) {
        let now = PreciseTime::now();
        let elapsed = to_sec(self.last_print_time.to(now));
        let rate = if elapsed > 0. { num_partitions as f64 / elapsed } else { 0. };
        bold_print(&format!("{}: {} partitions in {:.3} sec ({:.0} partitions/sec)",
                            label, num_partitions, elapsed, rate));
        self.last_print_time = now;
    }
}

impl Default for Timer {
    fn default() -> Timer {
        Timer::new()
    }
}
