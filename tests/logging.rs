use std::{
    io,
    sync::{Arc, Mutex},
};

use numerus::{convert, numeral::reducer::reduce};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines_at(&self, level: &str) -> usize {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).lines().filter(|line| line.contains(level)).count()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(run: impl FnOnce()) -> Captured {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt().with_writer(captured.clone())
                                              .with_ansi(false)
                                              .with_max_level(tracing::Level::TRACE)
                                              .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured
}

#[test]
fn internal_fault_is_logged_once() {
    let captured = capture(|| {
        let err = reduce(&[], "").unwrap_err();
        assert!(err.is_internal());
    });

    assert_eq!(captured.lines_at("ERROR"), 1);
}

#[test]
fn rejected_input_is_not_an_error_event() {
    let captured = capture(|| {
        for numeral in ["IIII", "VV", "VX", "MMMCMXCIXI", "V1"] {
            assert!(convert(numeral).is_err());
        }
    });

    assert_eq!(captured.lines_at("ERROR"), 0);
    assert!(captured.lines_at("rejected") >= 5);
}
