mod hashmap;
