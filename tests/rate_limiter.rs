use gatekeeper::RateLimiter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn test_limit_five_then_reject() {
    let limiter = RateLimiter::new(5, Duration::from_secs(10));

    for i in 0..5 {
        assert!(limiter.allow(), "request {} should be allowed", i + 1);
    }
    assert!(!limiter.allow(), "request beyond the limit should not be allowed");
}

#[test]
fn test_rejection_leaves_window_untouched() {
    let limiter = RateLimiter::new(2, Duration::from_secs(10));
    assert!(limiter.allow());
    assert!(limiter.allow());

    let before = limiter.snapshot();
    for _ in 0..10 {
        assert!(!limiter.allow());
    }
    assert_eq!(limiter.snapshot(), before);
}

#[test]
fn test_quota_returns_after_interval() {
    let limiter = RateLimiter::new(3, Duration::from_millis(50));
    for _ in 0..3 {
        assert!(limiter.allow());
    }
    assert!(!limiter.allow());

    thread::sleep(Duration::from_millis(80));

    for i in 0..3 {
        assert!(limiter.allow(), "request {} after reset should be allowed", i + 1);
    }
    assert!(!limiter.allow());
}

#[test]
fn test_deterministic_windows() {
    let limiter = RateLimiter::new(2, Duration::from_secs(10));
    let t0 = limiter.snapshot().window_start;

    assert!(limiter.allow_at(t0 + Duration::from_secs(1)));
    assert!(limiter.allow_at(t0 + Duration::from_secs(2)));
    assert!(!limiter.allow_at(t0 + Duration::from_secs(9)));
    assert!(!limiter.allow_at(t0 + Duration::from_secs(10)));

    // new window opens at the arrival time, not at t0 + 10s
    let t1 = t0 + Duration::from_secs(15);
    assert!(limiter.allow_at(t1));
    assert!(limiter.allow_at(t1 + Duration::from_secs(10)));
    assert!(!limiter.allow_at(t1 + Duration::from_secs(10)));
    assert_eq!(limiter.snapshot().window_start, t1);
}

#[test]
fn test_concurrent_callers_admit_exactly_limit() {
    const LIMIT: u32 = 10;
    const CALLERS: usize = 64;

    let limiter = Arc::new(RateLimiter::new(LIMIT, Duration::from_secs(60)));
    let barrier = Arc::new(Barrier::new(CALLERS));
    let admitted = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let limiter = limiter.clone();
            let barrier = barrier.clone();
            let admitted = admitted.clone();
            thread::spawn(move || {
                barrier.wait();
                if limiter.allow() {
                    admitted.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(admitted.load(Ordering::Relaxed), LIMIT as usize);
    assert_eq!(limiter.snapshot().count, LIMIT);
}

#[test]
fn test_concurrent_stress_many_rounds() {
    const LIMIT: u32 = 7;
    const THREADS: usize = 16;
    const CALLS_PER_THREAD: usize = 50;

    for _ in 0..20 {
        let limiter = Arc::new(RateLimiter::new(LIMIT, Duration::from_secs(60)));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let limiter = limiter.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    (0..CALLS_PER_THREAD).filter(|_| limiter.allow()).count()
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, LIMIT as usize);
    }
}
