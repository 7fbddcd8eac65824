//! Batch transfer between two buffers of different capacities, retried
//! until the source is drained.
use ringcell::RingBuffer;

fn main() {
    let inbox = RingBuffer::<u32, 32>::new();
    let staging = RingBuffer::<u32, 8>::new();

    let accepted = inbox.push_many(0..40);
    println!("accepted {} of 40", accepted);

    loop {
        let moved = inbox.move_to(&staging);
        if moved == 0 {
            break;
        }
        println!("moved batch of {}", moved);

        while let Some(v) = staging.try_pop() {
            println!("got = {}", v);
        }
    }
}
