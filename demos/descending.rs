use skiptower::Builder;

fn main() {
  let elements: Vec<u32> = (1..=100).rev().collect();

  let mut list = Builder::new()
    .with_max_height(8)
    .build_from(elements.iter().copied())
    .unwrap();

  list.remove(&elements[5]);

  println!("{}", list.towers());
}
