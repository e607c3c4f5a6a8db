use sip_uri::{Headers, Params, Uri};

#[test]
fn get_first_match() {
    let params = Params::new("a=1;b=2;a=3");
    assert_eq!(params.get("a"), Ok("1"));
    assert_eq!(params.get("b"), Ok("2"));

    let e = params.get("c").unwrap_err();
    assert_eq!(e.name(), "c");
    assert_eq!(e.to_string(), "no such parameter or header: c");
}

#[test]
fn get_is_byte_exact() {
    let params = Params::new("Transport=udp;ttl=15");
    // No case folding and no unescaping on lookup.
    assert!(params.get("transport").is_err());
    assert!(Params::new("%61=1").get("a").is_err());
    assert_eq!(Params::new("%61=1").get("%61"), Ok("1"));
}

#[test]
fn valueless_pairs() {
    let params = Params::new("lr;transport=tcp;x=");
    assert_eq!(params.get("lr"), Ok(""));
    assert_eq!(params.get("x"), Ok(""));
    assert_eq!(
        params.to_vec(),
        [("lr", ""), ("transport", "tcp"), ("x", "")]
    );
}

#[test]
fn list_preserves_order_and_duplicates() {
    let params = Params::new("a=1;b=2;a=3;a=1");
    assert_eq!(
        params.to_vec(),
        [("a", "1"), ("b", "2"), ("a", "3"), ("a", "1")]
    );
}

#[test]
fn visitor_abort_stops_the_scan() {
    let params = Params::new("a=1;b=2;c=3;d=4");
    let mut seen = Vec::new();
    let res: Result<(), &str> = params.iter().try_for_each(|(name, value)| {
        seen.push((name, value));
        if name == "b" {
            Err("boom")
        } else {
            Ok(())
        }
    });
    assert_eq!(res, Err("boom"));
    // The third and fourth pairs were never visited.
    assert_eq!(seen, [("a", "1"), ("b", "2")]);
}

#[test]
fn tolerates_leading_and_empty_segments() {
    assert_eq!(Params::new(";a=1").to_vec(), [("a", "1")]);
    assert_eq!(Params::new("a=1;;b=2;").to_vec(), [("a", "1"), ("b", "2")]);
    assert_eq!(Params::new("=5;a=1").to_vec(), [("a", "1")]);
    assert!(Params::new(";;=x;").is_empty());
}

#[test]
fn headers_use_amp_delimiter() {
    let headers = Headers::new("subject=urgent&to=carol&subject=later");
    assert_eq!(headers.get("subject"), Ok("urgent"));
    assert_eq!(
        headers.to_vec(),
        [("subject", "urgent"), ("to", "carol"), ("subject", "later")]
    );

    // A leading "?" straight from the URI string is fine.
    let headers = Headers::new("?to=carol");
    assert_eq!(headers.get("to"), Ok("carol"));
}

#[test]
fn values_keep_escaping() {
    let headers = Headers::new("body=hello%20world&cc=bob%40b.com");
    assert_eq!(headers.get("body"), Ok("hello%20world"));
    assert_eq!(headers.get("cc"), Ok("bob%40b.com"));
}

#[test]
fn value_may_contain_equals() {
    // Only the first "=" splits name from value.
    let params = Params::new("expr=a=b");
    assert_eq!(params.get("expr"), Ok("a=b"));
}

#[test]
fn iter_restarts_from_scratch() {
    let params = Params::new("a=1;b=2");
    assert_eq!(params.iter().count(), 2);
    assert_eq!(params.iter().count(), 2);

    let u = Uri::parse("sip:h;a=1;b=2").unwrap();
    let mut sum = String::new();
    for (name, _) in u.params() {
        sum.push_str(name);
    }
    assert_eq!(sum, "ab");
}

#[test]
fn through_the_uri() {
    let u = Uri::parse("sip:bob@example.com;transport=tcp;lr?priority=urgent").unwrap();
    assert_eq!(u.params().get("transport"), Ok("tcp"));
    assert_eq!(u.params().get("lr"), Ok(""));
    assert_eq!(u.headers().get("priority"), Ok("urgent"));
    assert_eq!(u.headers().get("transport").unwrap_err().name(), "transport");
}
