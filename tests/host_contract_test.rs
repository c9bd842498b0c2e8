/// Host-visible contract of the computation service
///
/// Exercises the public call surface the way a host bridge does: doubles
/// in, doubles or strings out, never an error.

use mobilecore::kernel::{Factorization, Limits, UserRecord};
use mobilecore::{ComputationService, Operation, Value};

fn service() -> ComputationService {
    ComputationService::native(Limits::default()).unwrap()
}

#[test]
fn test_add_equals_sum_of_truncated_arguments() {
    let svc = service();
    let samples: [f64; 10] = [-1000.75, -3.9, -1.0, -0.5, 0.0, 0.5, 2.9, 3.9, 17.0, 123456.99];
    for a in samples {
        for b in samples {
            let expected = (a.trunc() as i64 + b.trunc() as i64) as f64;
            assert_eq!(svc.add(a, b), expected, "add({}, {})", a, b);
        }
    }
    assert_eq!(svc.add(3.9, 2.9), 5.0);
}

#[test]
fn test_is_prime_definition() {
    let svc = service();
    assert_eq!(svc.is_prime(0.0), 0.0);
    assert_eq!(svc.is_prime(1.0), 0.0);
    for n in 2..300i32 {
        let has_two_divisors = (1..=n).filter(|d| n % d == 0).count() == 2;
        let expected = if has_two_divisors { 1.0 } else { 0.0 };
        assert_eq!(svc.is_prime(n as f64), expected, "isPrime({})", n);
    }
}

#[test]
fn test_factorize_product_and_primes() {
    let svc = service();
    for n in [2, 3, 4, 12, 97, 360, 1001, 65536, 999_983, 2_147_483_646] {
        let rendered = svc.factorize(n as f64);
        let parsed: Factorization = rendered.parse().unwrap();
        assert_eq!(parsed.n, n);
        assert_eq!(parsed.product(), n as i64, "{}", rendered);
        for p in &parsed.factors {
            assert_eq!(svc.is_prime(*p as f64), 1.0, "{} is not prime", p);
        }
    }
}

#[test]
fn test_factorize_below_two_is_an_error_string() {
    let svc = service();
    for n in [1.0, 0.0, -1.0, -100.0, 1.9] {
        let out = svc.factorize(n);
        assert!(out.starts_with("Error: factorize: requires n >= 2"), "{}", out);
    }
}

#[test]
fn test_fibonacci_known_values_and_recurrence() {
    let svc = service();
    assert_eq!(svc.fibonacci(0.0), 0.0);
    assert_eq!(svc.fibonacci(1.0), 1.0);
    assert_eq!(svc.fibonacci(10.0), 55.0);
    for n in 2..=78 {
        let n = n as f64;
        assert_eq!(
            svc.fibonacci(n),
            svc.fibonacci(n - 1.0) + svc.fibonacci(n - 2.0),
            "F({})",
            n
        );
    }
    // Outside the supported range the fallback applies
    assert_eq!(svc.fibonacci(79.0), 0.0);
    assert_eq!(svc.fibonacci(-5.0), 0.0);
}

#[test]
fn test_validate_email_examples() {
    let svc = service();
    assert_eq!(svc.validate_email("user@example.com"), 1.0);
    assert_eq!(svc.validate_email("not-an-email"), 0.0);
    assert_eq!(svc.validate_email(""), 0.0);
}

#[test]
fn test_create_user_round_trips() {
    let svc = service();
    let out = svc.create_user(1.0, "Alice", "alice@example.com");
    let user = UserRecord::from_json(&out).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    // Truncation applies to the id as well
    let out = svc.create_user(-3.9, "", "");
    assert_eq!(UserRecord::from_json(&out).unwrap().id, -3);
}

#[test]
fn test_zero_is_ambiguous_between_answer_and_failure() {
    let svc = service();
    // A computed 0 ...
    assert_eq!(svc.fibonacci(0.0), 0.0);
    assert!(svc.try_fibonacci(0.0).is_ok());
    // ... and a failure look the same to the host; only try_* tells them apart
    assert_eq!(svc.fibonacci(-1.0), 0.0);
    assert!(svc.try_fibonacci(-1.0).is_err());
}

#[test]
fn test_dispatch_by_js_name() {
    let svc = service();
    let op: Operation = "addNumbers".parse().unwrap();
    assert_eq!(
        svc.call(op, &[Value::Number(3.9), Value::Number(2.9)]),
        Value::Number(5.0)
    );
    let op: Operation = "getVersion".parse().unwrap();
    assert_eq!(
        svc.call(op, &[]),
        Value::Text(env!("CARGO_PKG_VERSION").to_string())
    );
}
