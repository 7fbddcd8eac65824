use ringcell::RingBuffer;
use std::sync::Arc;
use std::thread;

fn main() {
    let ring: Arc<RingBuffer<u32, 128>> = Arc::new(RingBuffer::new());
    let producer = ring.clone();

    let t = thread::spawn(move || {
        for i in 0..10 {
            while !producer.push_one(i) {
                std::hint::spin_loop();
            }
        }
    });

    let mut received = 0;
    while received < 10 {
        if let Some(i) = ring.try_pop() {
            println!("got = {}", i);
            received += 1;
        }
    }

    t.join().unwrap();
}
