#![no_main]

use std::alloc::{alloc, dealloc};
use std::ptr::NonNull;

use arbitrary::Arbitrary;
use buddy_arena::BuddyArena;
use libfuzzer_sys::fuzz_target;

const PAGE_SIZE: usize = 64;
const MAX_RANK: u32 = 8;

const MAX_PAGES: usize = 1024;

#[derive(Clone, Debug, Arbitrary)]
enum ArenaOp {
    Allocate(u32),
    Deallocate(usize),
}

#[derive(Clone, Debug, Arbitrary)]
struct Args {
    num_pages: usize,
    ops: Vec<ArenaOp>,
}

fuzz_target!(|args: Args| {
    let num_pages = args.num_pages % MAX_PAGES + 1;

    let layout = BuddyArena::region_layout(num_pages, PAGE_SIZE).expect("region parameters are valid");
    let region = match NonNull::new(unsafe { alloc(layout) }) {
        Some(p) => p,
        None => return,
    };

    let mut arena = unsafe { BuddyArena::new(region, num_pages, PAGE_SIZE, MAX_RANK) }
        .expect("arena parameters are valid");

    let mut outstanding = Vec::new();

    for op in args.ops {
        match op {
            ArenaOp::Allocate(raw_rank) => {
                // Fold into [0, MAX_RANK + 1] so invalid ranks are
                // exercised alongside valid ones.
                if let Ok(block) = arena.allocate(raw_rank % (MAX_RANK + 2)) {
                    outstanding.push(block);
                }
            }

            ArenaOp::Deallocate(raw_idx) => {
                if outstanding.is_empty() {
                    continue;
                }

                let idx = raw_idx % outstanding.len();
                let block = outstanding.swap_remove(idx);
                arena.deallocate(block).expect("live block failed to free");
            }
        }
    }

    for block in outstanding {
        arena.deallocate(block).expect("live block failed to free");
    }

    drop(arena);
    unsafe { dealloc(region.as_ptr(), layout) };
});
