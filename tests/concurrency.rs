use im_protocol::core::packet::UniPacket;
use im_protocol::message::{Element, ElementEncoder};
use im_protocol::utils::buffer_pool::BufferPool;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_builds_share_one_pool() {
    use tokio::task::JoinSet;

    let iterations = 5_000usize;
    let body_sizes = [0usize, 64, 512, 4096, 65536];
    let pool = BufferPool::new(4);

    let mut tasks = JoinSet::new();
    for &size in &body_sizes {
        let pool = pool.clone();
        tasks.spawn(async move {
            for i in 0..iterations {
                let body = vec![((i + size) & 0xFF) as u8; size];
                let packet = UniPacket::new("MessageSvc.PbSendMsg", vec![0x01, 0x02], vec![], body);
                let bytes = packet.to_bytes(&pool);
                assert_eq!(bytes.len(), packet.encoded_len());
                assert_eq!(&bytes[bytes.len() - size..], packet.body.as_slice());
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    let snapshot = pool.metrics().snapshot();
    // each envelope acquires one writer plus one child per segment
    assert_eq!(snapshot.acquired, (iterations * body_sizes.len() * 3) as u64);
    assert_eq!(snapshot.acquired, snapshot.released + snapshot.discarded);
    assert!(pool.available() <= snapshot.allocated as usize + 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_element_packing() {
    use tokio::task::JoinSet;

    let encoder = ElementEncoder::default();
    let mut tasks = JoinSet::new();
    for worker in 0..4i64 {
        let encoder = encoder.clone();
        tasks.spawn(async move {
            for i in 0..2_000i64 {
                let target = worker * 10_000 + i;
                let out = encoder
                    .pack(&Element::at(target, format!("@{target}")))
                    .unwrap();
                let attr6 = out[0].as_text().unwrap().attr6_buf.clone().unwrap();
                assert_eq!(&attr6[7..11], &(target as u32).to_be_bytes());
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}
