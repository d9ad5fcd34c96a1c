//! Metrics collection for the Watson clients.
//!
//! Keys are `service.operation` for requests, successes and latency, and
//! `service.operation.category` for failures.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A counter metric
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    /// Create a new counter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A gauge metric
#[derive(Debug)]
pub struct Gauge {
    name: String,
    value: AtomicU64,
}

impl Gauge {
    /// Create a new gauge
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    /// Increment the gauge
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement the gauge, saturating at zero
    pub fn dec(&self) {
        let _ = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| Some(v.saturating_sub(1)));
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A histogram of millisecond latencies
#[derive(Debug)]
pub struct Histogram {
    name: String,
    buckets: Vec<u64>,
    counts: Vec<AtomicU64>,
    sum: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    /// Create a new histogram with default latency buckets (milliseconds)
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_buckets(
            name,
            vec![5, 10, 25, 50, 100, 250, 500, 1_000, 2_500, 5_000, 10_000],
        )
    }

    /// Create a histogram with custom buckets
    pub fn with_buckets(name: impl Into<String>, buckets: Vec<u64>) -> Self {
        let counts = buckets.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            name: name.into(),
            buckets,
            counts,
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Observe a value
    pub fn observe(&self, value: u64) {
        for (i, bucket) in self.buckets.iter().enumerate() {
            if value <= *bucket {
                self.counts[i].fetch_add(1, Ordering::Relaxed);
            }
        }

        self.sum.fetch_add(value, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the count
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Mean of observed values, if any
    pub fn mean(&self) -> Option<f64> {
        let count = self.count();
        if count == 0 {
            None
        } else {
            Some(self.sum.load(Ordering::Relaxed) as f64 / count as f64)
        }
    }

    /// Get cumulative bucket counts
    pub fn bucket_counts(&self) -> Vec<u64> {
        self.counts
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect()
    }
}

/// Trait for metrics collection
pub trait MetricsCollector: Send + Sync {
    /// Record a request being made
    fn record_request(&self, service: &str, operation: &str);

    /// Record a request completing successfully
    fn record_success(&self, service: &str, operation: &str, duration_ms: u64);

    /// Record a request failing
    fn record_failure(&self, service: &str, operation: &str, category: &str);

    /// Record latency
    fn record_latency(&self, service: &str, operation: &str, duration_ms: u64);

    /// Get a snapshot of all metrics
    fn snapshot(&self) -> MetricsSnapshot;
}

/// A snapshot of metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Total requests by service.operation
    pub total_requests: HashMap<String, u64>,
    /// Successful requests by service.operation
    pub successful_requests: HashMap<String, u64>,
    /// Failed requests by service.operation.category
    pub failed_requests: HashMap<String, u64>,
    /// Average latency by service.operation
    pub avg_latency_ms: HashMap<String, f64>,
    /// Requests started but not yet finished
    pub in_flight: u64,
}

/// In-memory metrics collector
pub struct InMemoryMetricsCollector {
    requests: RwLock<HashMap<String, Arc<Counter>>>,
    successes: RwLock<HashMap<String, Arc<Counter>>>,
    failures: RwLock<HashMap<String, Arc<Counter>>>,
    latencies: RwLock<HashMap<String, Arc<Histogram>>>,
    in_flight: Gauge,
}

impl InMemoryMetricsCollector {
    /// Create a new in-memory metrics collector
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(HashMap::new()),
            successes: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashMap::new()),
            latencies: RwLock::new(HashMap::new()),
            in_flight: Gauge::new("in_flight"),
        }
    }

    fn get_or_create_counter(
        map: &RwLock<HashMap<String, Arc<Counter>>>,
        key: &str,
    ) -> Arc<Counter> {
        {
            let read = map.read();
            if let Some(counter) = read.get(key) {
                return counter.clone();
            }
        }

        let mut write = map.write();
        write
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Counter::new(key)))
            .clone()
    }

    fn get_or_create_histogram(
        map: &RwLock<HashMap<String, Arc<Histogram>>>,
        key: &str,
    ) -> Arc<Histogram> {
        {
            let read = map.read();
            if let Some(histogram) = read.get(key) {
                return histogram.clone();
            }
        }

        let mut write = map.write();
        write
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(key)))
            .clone()
    }
}

impl Default for InMemoryMetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector for InMemoryMetricsCollector {
    fn record_request(&self, service: &str, operation: &str) {
        let key = format!("{}.{}", service, operation);
        Self::get_or_create_counter(&self.requests, &key).inc();
        self.in_flight.inc();
    }

    fn record_success(&self, service: &str, operation: &str, duration_ms: u64) {
        let key = format!("{}.{}", service, operation);
        Self::get_or_create_counter(&self.successes, &key).inc();
        self.in_flight.dec();
        self.record_latency(service, operation, duration_ms);
    }

    fn record_failure(&self, service: &str, operation: &str, category: &str) {
        let key = format!("{}.{}.{}", service, operation, category);
        Self::get_or_create_counter(&self.failures, &key).inc();
        self.in_flight.dec();
    }

    fn record_latency(&self, service: &str, operation: &str, duration_ms: u64) {
        let key = format!("{}.{}", service, operation);
        Self::get_or_create_histogram(&self.latencies, &key).observe(duration_ms);
    }

    fn snapshot(&self) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();

        for (key, counter) in self.requests.read().iter() {
            snapshot.total_requests.insert(key.clone(), counter.get());
        }

        for (key, counter) in self.successes.read().iter() {
            snapshot.successful_requests.insert(key.clone(), counter.get());
        }

        for (key, counter) in self.failures.read().iter() {
            snapshot.failed_requests.insert(key.clone(), counter.get());
        }

        for (key, histogram) in self.latencies.read().iter() {
            if let Some(mean) = histogram.mean() {
                snapshot.avg_latency_ms.insert(key.clone(), mean);
            }
        }

        snapshot.in_flight = self.in_flight.get();
        snapshot
    }
}

/// No-op metrics collector for testing or when metrics are disabled
#[derive(Debug, Default)]
pub struct NoopMetricsCollector;

impl MetricsCollector for NoopMetricsCollector {
    fn record_request(&self, _service: &str, _operation: &str) {}
    fn record_success(&self, _service: &str, _operation: &str, _duration_ms: u64) {}
    fn record_failure(&self, _service: &str, _operation: &str, _category: &str) {}
    fn record_latency(&self, _service: &str, _operation: &str, _duration_ms: u64) {}
    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let counter = Counter::new("requests");
        assert_eq!(counter.get(), 0);
        counter.inc();
        counter.inc();
        assert_eq!(counter.get(), 2);
        assert_eq!(counter.name(), "requests");
    }

    #[test]
    fn test_gauge_saturates() {
        let gauge = Gauge::new("in_flight");
        gauge.dec();
        assert_eq!(gauge.get(), 0);
        gauge.inc();
        gauge.inc();
        gauge.dec();
        assert_eq!(gauge.get(), 1);
    }

    #[test]
    fn test_histogram() {
        let histogram = Histogram::new("latency");

        histogram.observe(4);
        histogram.observe(40);
        histogram.observe(400);

        assert_eq!(histogram.count(), 3);
        assert_eq!(histogram.mean(), Some(148.0));
        assert_eq!(histogram.bucket_counts()[0], 1);
        assert_eq!(histogram.bucket_counts()[6], 3);
    }

    #[test]
    fn test_in_memory_collector() {
        let collector = InMemoryMetricsCollector::new();

        collector.record_request("alchemy_language", "ranked_keywords");
        collector.record_success("alchemy_language", "ranked_keywords", 100);
        collector.record_request("alchemy_language", "ranked_keywords");
        collector.record_failure("alchemy_language", "ranked_keywords", "service");
        collector.record_request("conversation", "message");

        let snapshot = collector.snapshot();
        assert_eq!(
            snapshot.total_requests.get("alchemy_language.ranked_keywords"),
            Some(&2)
        );
        assert_eq!(
            snapshot
                .successful_requests
                .get("alchemy_language.ranked_keywords"),
            Some(&1)
        );
        assert_eq!(
            snapshot
                .failed_requests
                .get("alchemy_language.ranked_keywords.service"),
            Some(&1)
        );
        assert_eq!(
            snapshot.avg_latency_ms.get("alchemy_language.ranked_keywords"),
            Some(&100.0)
        );
        assert_eq!(snapshot.in_flight, 1);
    }
}
